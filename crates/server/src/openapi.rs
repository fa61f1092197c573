use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PersonDoc { pub id: i64, pub name: String, pub age: i32 }

#[derive(ToSchema)]
pub struct PersonViewDoc { pub name: String, pub age: i32 }

#[derive(ToSchema)]
pub struct NameUpdateDoc { pub name: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub status: u16,
    /// `dd-MM-yyyy HH:mm:ss`
    pub timestamp: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::persons::list_persons,
        crate::routes::persons::find_persons_by_name,
        crate::routes::persons::get_person,
        crate::routes::persons::create_person,
        crate::routes::persons::replace_person,
        crate::routes::persons::patch_person_name,
        crate::routes::persons::delete_person,
    ),
    components(
        schemas(
            HealthResponse,
            PersonDoc,
            PersonViewDoc,
            NameUpdateDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "persons")
    )
)]
pub struct ApiDoc;

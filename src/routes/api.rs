use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::repository::FileRecordRepository;
use crate::services::api as api_service;

#[get("/v1/records")]
pub async fn api_v1_records(
    req: HttpRequest,
    repo: web::Data<FileRecordRepository>,
) -> impl Responder {
    let response = api_service::list_records(repo.get_ref(), req.query_string());
    HttpResponse::Ok().json(response)
}

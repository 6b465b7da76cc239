use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use tera::{Context, Tera};

use crate::forms::main::SearchForm;
use crate::repository::FileRecordRepository;
use crate::routes::{index_location, redirect, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    repo: web::Data<FileRecordRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_index_page(repo.get_ref(), req.query_string());

    let mut context = Context::new();
    context.insert("records", &data.records);
    context.insert("columns", &data.columns);
    context.insert("state", &data.state);
    context.insert("query", &data.query);

    render_template(&tera, "main/index.html", &context)
}

#[post("/search")]
pub async fn search_records(
    req: HttpRequest,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder {
    let query = main_service::apply_search(req.query_string(), &form.filter);
    redirect(&index_location(&query))
}

#[get("/sort/{field}")]
pub async fn sort_records(req: HttpRequest, field: web::Path<String>) -> impl Responder {
    match main_service::apply_sort(req.query_string(), &field) {
        Ok(query) => redirect(&index_location(&query)),
        Err(err) => HttpResponse::BadRequest().body(err.to_string()),
    }
}

#[get("/page/{page}")]
pub async fn select_page(req: HttpRequest, page: web::Path<usize>) -> impl Responder {
    let query = main_service::apply_page(req.query_string(), page.into_inner());
    redirect(&index_location(&query))
}

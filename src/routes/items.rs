use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use tera::{Context, Tera};

use crate::forms::items::AddItemForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselItemRepository;
use crate::routes::{redirect, render_template, service_error_response};
use crate::services::items::{ListingSettings, add_item as add_item_service, load_index_page};

#[get("/")]
pub async fn show_items(
    params: web::Query<HashMap<String, String>>,
    repo: web::Data<DieselItemRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let settings = ListingSettings {
        url: "/".to_string(),
        page_size: server_config.page_size,
        page_parameter: server_config.page_parameter.clone(),
    };
    let repo = repo.into_inner();
    let params = params.into_inner();

    let page = match web::block(move || load_index_page(&repo, &settings, &params)).await {
        Ok(Ok(page)) => page,
        Ok(Err(err)) => return service_error_response(&err),
        Err(e) => {
            error!("Listing task failed: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("items", &page.items);
    context.insert("pager", &page.pager);
    context.insert("sort", &page.sort);
    context.insert("order", &page.order);
    context.insert("submit", &page.submit);

    render_template(&tera, "items/index.html", &context)
}

#[post("/items")]
pub async fn add_item(
    repo: web::Data<DieselItemRepository>,
    web::Form(form): web::Form<AddItemForm>,
) -> impl Responder {
    let repo = repo.into_inner();

    match web::block(move || add_item_service(&repo, form)).await {
        Ok(Ok(())) => redirect("/"),
        Ok(Err(err)) => service_error_response(&err),
        Err(e) => {
            error!("Add item task failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

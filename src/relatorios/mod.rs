//! Report HTTP surface, mounted under `/relatorios`.

pub mod boletos;
pub mod despesas;
pub mod handlers;
pub mod models;
pub mod votacao;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mensagem").route(web::get().to(handlers::mensagem)))
        .service(web::resource("/empresas").route(web::post().to(handlers::empresas)))
        .service(
            web::resource("/empresas/filtrar").route(web::post().to(handlers::empresas_filtrar)),
        )
        .service(web::resource("/sindicalizados").route(web::post().to(handlers::sindicalizados)))
        .service(
            web::resource("/sindicalizados/filtro")
                .route(web::post().to(handlers::sindicalizados_filtro)),
        )
        .service(web::resource("/despesa-mensal").route(web::post().to(despesas::despesa_mensal)))
        .service(web::resource("/boletos/geral").route(web::post().to(boletos::boletos_geral)))
        .service(web::resource("/votacao").route(web::post().to(votacao::votacao)));
}

//src/main.rs

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::{admin_guard, user_guard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/users/login", post(handlers::auth::user_login));

    // Recursos acadêmicos: todas as rotas exigem token de admin, e o admin
    // autenticado vira o tenant das consultas.
    let curso_routes = Router::new()
        .route(
            "/",
            post(handlers::cursos::create).get(handlers::cursos::find_all),
        )
        .route(
            "/{id}",
            get(handlers::cursos::find_one)
                .patch(handlers::cursos::update)
                .delete(handlers::cursos::remove),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    let disciplina_routes = Router::new()
        .route(
            "/",
            post(handlers::disciplinas::create).get(handlers::disciplinas::find_all),
        )
        .route(
            "/{id}",
            get(handlers::disciplinas::find_one)
                .patch(handlers::disciplinas::update)
                .delete(handlers::disciplinas::remove),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    let turma_routes = Router::new()
        .route(
            "/",
            post(handlers::turmas::create).get(handlers::turmas::find_all),
        )
        .route(
            "/{id}",
            get(handlers::turmas::find_one)
                .patch(handlers::turmas::update)
                .delete(handlers::turmas::remove),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    let professor_routes = Router::new()
        .route(
            "/",
            post(handlers::professores::create).get(handlers::professores::find_all),
        )
        .route(
            "/{id}",
            get(handlers::professores::find_one)
                .patch(handlers::professores::update)
                .delete(handlers::professores::remove),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    let aluno_routes = Router::new()
        .route(
            "/",
            post(handlers::alunos::create).get(handlers::alunos::find_all),
        )
        .route(
            "/{id}",
            get(handlers::alunos::find_one)
                .patch(handlers::alunos::update)
                .delete(handlers::alunos::remove),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    // Rotas de usuários: token de user ou de admin; a política por
    // requisição decide o que cada papel pode fazer.
    let user_routes = Router::new()
        .route(
            "/",
            post(handlers::users::create).get(handlers::users::find_all),
        )
        .route(
            "/{id}",
            get(handlers::users::find_one)
                .patch(handlers::users::update)
                .delete(handlers::users::remove),
        )
        .route(
            "/email/{email}",
            get(handlers::users::find_one_by_email)
                .patch(handlers::users::update_by_email)
                .delete(handlers::users::remove_by_email),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            user_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/cursos", curso_routes)
        .nest("/api/disciplinas", disciplina_routes)
        .nest("/api/turmas", turma_routes)
        .nest("/api/professores", professor_routes)
        .nest("/api/alunos", aluno_routes)
        .nest("/api/users", user_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}

pub mod aluno_service;
pub mod auth;
pub mod curso_service;
pub mod disciplina_service;
pub mod professor_service;
pub mod turma_service;
pub mod user_service;

pub mod alunos;
pub mod auth;
pub mod cursos;
pub mod disciplinas;
pub mod professores;
pub mod turmas;
pub mod users;

// Popula o banco com o tenant padrão e um conjunto mínimo de dados
// acadêmicos. Idempotente: rodar de novo não duplica nada.
//
// Requer DATABASE_URL, DEFAULT_ADMIN_EMAIL e DEFAULT_ADMIN_PASSWORD no
// ambiente (ou no .env).

use bcrypt::hash;
use dotenvy::dotenv;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
    let admin_email =
        std::env::var("DEFAULT_ADMIN_EMAIL").expect("DEFAULT_ADMIN_EMAIL deve ser definida");
    let admin_password =
        std::env::var("DEFAULT_ADMIN_PASSWORD").expect("DEFAULT_ADMIN_PASSWORD deve ser definida");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Falha ao conectar ao banco de dados");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    match seed(&pool, &admin_email, &admin_password).await {
        Ok(()) => println!("\n✅ Seed concluído com sucesso!"),
        Err(e) => {
            eprintln!("\n❌ Erro ao popular o banco: {}", e);
            std::process::exit(1);
        }
    }
}

async fn seed(
    pool: &PgPool,
    admin_email: &str,
    admin_password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🌱 Iniciando seed do banco de dados...");

    let admin_id = seed_admin(pool, admin_email, admin_password).await?;

    // bcrypt é caro; um único hash atende todas as contas de exemplo.
    let password_hash = hash("senhaSegura123", bcrypt::DEFAULT_COST)?;

    seed_cursos(pool, admin_id).await?;
    seed_disciplinas(pool, admin_id).await?;
    seed_professores(pool, admin_id, &password_hash).await?;
    seed_alunos(pool, admin_id, &password_hash).await?;

    Ok(())
}

async fn seed_admin(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Uuid, Box<dyn std::error::Error>> {
    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM admins WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    if let Some(id) = existing {
        println!("   ✓ Admin padrão já existe ({})", email);
        return Ok(id);
    }

    let password_hash = hash(password, bcrypt::DEFAULT_COST)?;
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO admins (email, name, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind("Administrador Padrão")
    .bind(&password_hash)
    .fetch_one(pool)
    .await?;

    println!("   ✓ Admin padrão criado ({})", email);
    Ok(id)
}

async fn seed_cursos(pool: &PgPool, admin_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    let cursos = [
        ("MAT", "Matemática", "Licenciatura em Matemática"),
        ("FIS", "Física", "Licenciatura em Física"),
        ("GEO", "Geografia", "Licenciatura em Geografia"),
    ];

    for (codigo, nome, descricao) in cursos {
        sqlx::query(
            "INSERT INTO cursos (codigo, nome, descricao, admin_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (codigo) DO NOTHING",
        )
        .bind(codigo)
        .bind(nome)
        .bind(descricao)
        .bind(admin_id)
        .execute(pool)
        .await?;
    }

    println!("   ✓ Cursos: MAT, FIS, GEO");
    Ok(())
}

async fn curso_id_por_codigo(
    pool: &PgPool,
    codigo: &str,
) -> Result<Uuid, Box<dyn std::error::Error>> {
    let id: Uuid = sqlx::query_scalar("SELECT id FROM cursos WHERE codigo = $1")
        .bind(codigo)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

async fn seed_disciplinas(pool: &PgPool, admin_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    let geo = curso_id_por_codigo(pool, "GEO").await?;

    sqlx::query(
        "INSERT INTO disciplinas (codigo, nome, descricao, carga_horaria, periodo, curso_id, admin_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (codigo) DO NOTHING",
    )
    .bind("GEO001")
    .bind("Climatologia")
    .bind("Introdução à climatologia")
    .bind(66)
    .bind("2")
    .bind(geo)
    .bind(admin_id)
    .execute(pool)
    .await?;

    println!("   ✓ Disciplinas: GEO001");
    Ok(())
}

async fn seed_professores(
    pool: &PgPool,
    admin_id: Uuid,
    password_hash: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let professores = [
        (
            "25P00001",
            "Ana Silva",
            "1980-05-15",
            "Matemática",
            "ana.silva@escola.com",
        ),
        (
            "25P00002",
            "Carlos Oliveira",
            "1975-11-22",
            "Física",
            "carlos.oliveira@escola.com",
        ),
    ];

    for (matricula, nome, nascimento, especialidade, email) in professores {
        sqlx::query(
            "INSERT INTO professores
                 (matricula, nome_completo, data_nascimento, especialidade, email, password, admin_id)
             VALUES ($1, $2, $3::date, $4, $5, $6, $7)
             ON CONFLICT (matricula) DO NOTHING",
        )
        .bind(matricula)
        .bind(nome)
        .bind(nascimento)
        .bind(especialidade)
        .bind(email)
        .bind(password_hash)
        .bind(admin_id)
        .execute(pool)
        .await?;
    }

    println!("   ✓ Professores: 25P00001, 25P00002");
    Ok(())
}

async fn seed_alunos(
    pool: &PgPool,
    admin_id: Uuid,
    password_hash: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let alunos = [
        (
            "25A00001",
            "João Pereira",
            "2005-03-20",
            "MAT",
            "joao.pereira@escola.com",
        ),
        (
            "25A00002",
            "Maria Santos",
            "2006-07-12",
            "FIS",
            "maria.santos@escola.com",
        ),
    ];

    for (matricula, nome, nascimento, curso_codigo, email) in alunos {
        let curso = curso_id_por_codigo(pool, curso_codigo).await?;

        sqlx::query(
            "INSERT INTO alunos
                 (matricula, nome_completo, data_nascimento, curso, email, password, admin_id)
             VALUES ($1, $2, $3::date, $4, $5, $6, $7)
             ON CONFLICT (matricula) DO NOTHING",
        )
        .bind(matricula)
        .bind(nome)
        .bind(nascimento)
        .bind(curso)
        .bind(email)
        .bind(password_hash)
        .bind(admin_id)
        .execute(pool)
        .await?;
    }

    println!("   ✓ Alunos: 25A00001, 25A00002");
    Ok(())
}

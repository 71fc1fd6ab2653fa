use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create roles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS roles (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(50) NOT NULL UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            full_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            role_id BIGINT NOT NULL REFERENCES roles(id),
            status VARCHAR(20) NOT NULL DEFAULT 'active'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create subjects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create classes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create class_timetable table. Times are fixed-width HH:MM strings so
    // SQL comparisons match the in-process interval predicate.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS class_timetable (
            id BIGSERIAL PRIMARY KEY,
            class_id BIGINT NOT NULL REFERENCES classes(id),
            day_of_week VARCHAR(9) NOT NULL CHECK (
                day_of_week IN ('Monday', 'Tuesday', 'Wednesday', 'Thursday', 'Friday')
            ),
            period INT NOT NULL,
            start_time VARCHAR(5) NOT NULL,
            end_time VARCHAR(5) NOT NULL,
            subject_id BIGINT NOT NULL REFERENCES subjects(id),
            teacher_user_id BIGINT NULL REFERENCES users(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_class_timetable_class_id ON class_timetable(class_id)",
        "CREATE INDEX IF NOT EXISTS idx_class_timetable_teacher_day \
         ON class_timetable(teacher_user_id, day_of_week)",
        "CREATE INDEX IF NOT EXISTS idx_users_role_id ON users(role_id)",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    // Seed the fixed role set
    sqlx::query(
        r#"
        INSERT INTO roles (name)
        VALUES ('admin'), ('teacher'), ('student')
        ON CONFLICT (name) DO NOTHING;
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}

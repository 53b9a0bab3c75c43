use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

fn build_sqlite_url(path: &std::path::Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

async fn has_table(conn: &DatabaseConnection, name: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!(
                "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
                name
            ),
        ))
        .await?;
    Ok(!rows.is_empty())
}

async fn ensure_table(
    conn: &DatabaseConnection,
    name: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    if !has_table(conn, name).await? {
        tracing::info!("Creating {} table", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

async fn has_column(
    conn: &DatabaseConnection,
    table: &str,
    column: &str,
) -> anyhow::Result<bool> {
    let pragma = format!("PRAGMA table_info('{}');", table);
    let rows = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, pragma))
        .await?;
    for row in rows {
        let name: String = row.try_get("", "name").unwrap_or_default();
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

pub async fn initialize_database(db_path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    let db_url = build_sqlite_url(&absolute_path);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap: every table is created idempotently on
    // startup; schema changes land as additive ALTERs below.

    ensure_table(
        &conn,
        "a001_material",
        r#"
        CREATE TABLE a001_material (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            material_type TEXT NOT NULL DEFAULT 'PLA',
            color TEXT,
            brand TEXT,
            cost_per_gram REAL NOT NULL DEFAULT 0,
            current_stock_grams REAL NOT NULL DEFAULT 0,
            low_stock_threshold REAL NOT NULL DEFAULT 0,
            print_temp_min REAL,
            print_temp_max REAL,
            bed_temp_min REAL,
            bed_temp_max REAL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a002_printer",
        r#"
        CREATE TABLE a002_printer (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            model TEXT,
            hourly_rate REAL NOT NULL DEFAULT 0,
            power_consumption_watts REAL NOT NULL DEFAULT 0,
            electricity_cost_per_kwh REAL NOT NULL DEFAULT 0,
            total_print_hours REAL NOT NULL DEFAULT 0,
            total_print_count INTEGER NOT NULL DEFAULT 0,
            last_maintenance_at TEXT,
            hours_at_last_maintenance REAL NOT NULL DEFAULT 0,
            maintenance_interval_hours REAL NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            current_job_order_id TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    // hours_at_last_maintenance arrived after the first release; backfill
    // the column on old databases
    if has_table(&conn, "a002_printer").await?
        && !has_column(&conn, "a002_printer", "hours_at_last_maintenance").await?
    {
        tracing::info!("Adding hours_at_last_maintenance column to a002_printer");
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "ALTER TABLE a002_printer ADD COLUMN hours_at_last_maintenance REAL NOT NULL DEFAULT 0;"
                .to_string(),
        ))
        .await?;
    }

    ensure_table(
        &conn,
        "a003_part",
        r#"
        CREATE TABLE a003_part (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            material_id TEXT NOT NULL,
            weight_grams REAL NOT NULL DEFAULT 0,
            print_time_minutes REAL NOT NULL DEFAULT 0,
            material_cost REAL NOT NULL DEFAULT 0,
            print_cost REAL NOT NULL DEFAULT 0,
            base_cost REAL NOT NULL DEFAULT 0,
            default_markup_percent REAL NOT NULL DEFAULT 0,
            suggested_price REAL NOT NULL DEFAULT 0,
            category TEXT,
            tags TEXT NOT NULL DEFAULT '[]',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a004_order",
        r#"
        CREATE TABLE a004_order (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            customer_name TEXT NOT NULL,
            customer_phone TEXT,
            customer_email TEXT,
            customer_telegram TEXT,
            status TEXT NOT NULL DEFAULT 'new',
            lines TEXT NOT NULL DEFAULT '[]',
            subtotal REAL NOT NULL DEFAULT 0,
            markup REAL NOT NULL DEFAULT 0,
            total REAL NOT NULL DEFAULT 0,
            started_at TEXT,
            finished_at TEXT,
            delivered_at TEXT,
            estimated_completion TEXT,
            notes TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a005_maintenance_log",
        r#"
        CREATE TABLE a005_maintenance_log (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            printer_id TEXT NOT NULL,
            maintenance_type TEXT NOT NULL DEFAULT 'other',
            hours_at_maintenance REAL NOT NULL DEFAULT 0,
            cost REAL,
            performed_at TEXT,
            next_due_at TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a006_inventory_transaction",
        r#"
        CREATE TABLE a006_inventory_transaction (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            material_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            amount_grams REAL NOT NULL DEFAULT 0,
            order_id TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            is_posted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a007_user_settings",
        r#"
        CREATE TABLE a007_user_settings (
            id TEXT PRIMARY KEY NOT NULL,
            language TEXT NOT NULL DEFAULT 'en',
            currency TEXT NOT NULL DEFAULT 'RUB',
            theme TEXT NOT NULL DEFAULT 'dark',
            default_markup_percent REAL NOT NULL DEFAULT 30,
            tax_rate REAL,
            telegram_chat_id TEXT,
            telegram_notifications_enabled INTEGER NOT NULL DEFAULT 0,
            notify_on_new_order INTEGER NOT NULL DEFAULT 1,
            notify_on_status_change INTEGER NOT NULL DEFAULT 1,
            notify_on_low_stock INTEGER NOT NULL DEFAULT 1,
            updated_at TEXT
        );
    "#,
    )
    .await?;

    ensure_table(
        &conn,
        "a008_exchange_rates",
        r#"
        CREATE TABLE a008_exchange_rates (
            id TEXT PRIMARY KEY NOT NULL,
            usd REAL NOT NULL,
            eur REAL NOT NULL,
            cny REAL NOT NULL,
            fetched_at TEXT
        );
    "#,
    )
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sqlite_url() {
        assert_eq!(
            build_sqlite_url(std::path::Path::new("/tmp/app.db")),
            "sqlite:///tmp/app.db?mode=rwc"
        );
        // Windows path gets a leading slash and forward separators
        assert_eq!(
            build_sqlite_url(std::path::Path::new("C:\\data\\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }
}

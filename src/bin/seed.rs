use storefront_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_config(&pool).await?;
    seed_products(&pool).await?;
    seed_testimonials(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_config(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO store_config
            (id, store_name, description, tiktok_url, shopee_url,
             whatsapp_number, whatsapp_message, primary_color, address, url_address)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(1_i32)
    .bind("Demo Store")
    .bind("Small storefront demo data")
    .bind("https://tiktok.com/@demostore")
    .bind("https://shopee.co.id/demostore")
    .bind("6281200000000")
    .bind("Hi, I am interested in your catalog")
    .bind("#3b82f6")
    .bind(serde_json::json!(["Jl. Demo No. 1, Jakarta"]))
    .bind(serde_json::json!(["https://maps.example.com/demo"]))
    .execute(pool)
    .await?;

    println!("Ensured store config");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    // Seed once; products have no natural unique key to upsert on.
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        println!("Products already present, skipping");
        return Ok(());
    }

    let products = vec![
        ("Rattan Tote Bag", "Fashion", 185000.0, "Hand-woven rattan tote"),
        ("Ceramic Mug Set", "Home", 95000.0, "Set of two glazed mugs"),
        ("Batik Scarf", "Fashion", 120000.0, "Hand-stamped batik scarf"),
        ("Scented Candle", "Home", 60000.0, "Soy wax, lemongrass"),
    ];

    for (name, category, price, description) in products {
        sqlx::query(
            r#"
            INSERT INTO products
                (name, whatsapp, tiktok, shopee, category, price, image, description, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE)
            "#,
        )
        .bind(name)
        .bind("6281200000000")
        .bind("https://tiktok.com/@demostore")
        .bind("https://shopee.co.id/demostore")
        .bind(category)
        .bind(price)
        .bind(serde_json::json!(["https://images.example.com/placeholder.jpg"]))
        .bind(description)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_testimonials(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM testimonials")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        println!("Testimonials already present, skipping");
        return Ok(());
    }

    let testimonials = vec![
        ("Sari", "Fast delivery, lovely packaging.", 5_i16),
        ("Budi", "Exactly as pictured.", 4_i16),
    ];

    for (name, message, rating) in testimonials {
        sqlx::query(
            r#"
            INSERT INTO testimonials (name, message, rating)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(name)
        .bind(message)
        .bind(rating)
        .execute(pool)
        .await?;
    }

    println!("Seeded testimonials");
    Ok(())
}

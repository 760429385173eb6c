use anyhow::Result;
use rs_rag_ui::client::RecommendClient;
use rs_rag_ui::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Recommendation API Test");
    println!("{}", "=".repeat(50));

    let config = Config::from_env();
    println!("Endpoint: {}", config.api_url);

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What is a good laptop backpack for travel?".to_string());
    println!("Question: {}", question);

    let client = RecommendClient::new(&config.api_url);

    println!("\n{}", "─".repeat(40));
    match client.ask(&question).await {
        Ok(recommendation) => {
            println!("✅ Request successful!");
            println!("\n📝 Answer:\n{}", recommendation.answer);

            if recommendation.keywords.is_empty() {
                println!("\n⚠️  No keywords returned");
            } else {
                println!("\n🔑 Keywords:");
                for (i, keyword) in recommendation.keywords.iter().enumerate() {
                    println!("{}. {}", i + 1, keyword);
                }
            }

            println!(
                "\n📊 Number of relevant products found: {}",
                recommendation.num_results
            );
        }
        Err(error) => {
            println!("❌ Request failed: {}", error);
            println!("💬 User-facing message: {}", error.user_message());
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("🏁 Test completed!");

    Ok(())
}

use std::env;
use std::path::PathBuf;
use veoprompt::{
    encode_reference_images, EnvCredentialBroker, GeminiClient, GeminiConfig, PromptSession, Style,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    veoprompt::logger::init_with_config(
        veoprompt::logger::LoggerConfig::development(),
    )?;

    log::info!("🔍 Checking Gemini environment...");
    match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!("Key starts with: {}...", &key[..6.min(key.len())]);
        }
        _ => {
            log::warn!("⚠️  No GEMINI_API_KEY set, the model call will fail");
        }
    }

    let config = GeminiConfig::from_env();
    let client = match GeminiClient::new(config) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized (model: {})", client.prompts().model());
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    let mut session = PromptSession::start(EnvCredentialBroker).await;
    if !session.credential_known() {
        log::warn!("No key selected yet, attempting selection flow...");
        session.select_key().await?;
    }

    // Title comes from the command line, image paths from the remaining args.
    let mut args = env::args().skip(1);
    let title = args.next().unwrap_or_else(|| "Cải tạo phòng ngủ cũ".to_string());
    let image_paths: Vec<PathBuf> = args.map(PathBuf::from).collect();

    let images = encode_reference_images(&image_paths).await?;
    log::info!(
        "🎬 Generating a 3-shot package for \"{}\" with {} reference image(s)",
        title,
        images.len()
    );

    match session
        .generate(client.prompts(), &title, 3, Style::Auto, images)
        .await
    {
        Ok(set) => {
            log::info!("✅ Prompt package ready");
            log::info!("📌 Subject: {}", set.analysis.subject);
            log::info!("📌 Action: {}", set.analysis.action_type);
            log::info!("📌 Progression: {}", set.analysis.progression);
            for (i, prompt) in set.image_prompts.iter().enumerate() {
                log::info!("🖼️  Image prompt #{}: {}", i + 1, prompt);
                if i < set.video_prompts.len() {
                    log::info!("🎥 Transition {} → {}: {}", i + 1, i + 2, set.video_prompts[i]);
                }
            }
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            if !session.credential_known() {
                log::warn!("💡 Select a key from a project with billing enabled and retry");
            }
            return Err(e.into());
        }
    }

    Ok(())
}

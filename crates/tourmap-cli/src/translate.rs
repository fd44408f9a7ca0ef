use tourmap_core::AppConfig;
use tourmap_translate::GoogleTranslateClient;

/// `tourmap translate`: prints the translation on stdout.
///
/// # Errors
///
/// Returns an error if the translation service cannot be reached or answers
/// with something other than JSON.
pub(crate) async fn run_translate(
    config: &AppConfig,
    text: &str,
    from: &str,
    to: &str,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let client = GoogleTranslateClient::from_config(config)?;
    match client.translate(text, from, to).await? {
        Some(translated) => println!("{translated}"),
        None => eprintln!("no translation returned for {from} -> {to}"),
    }
    Ok(())
}

use crate::catalog;
use crate::error::ProviderError;
use crate::models::GenerationResponse;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, ProviderError> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|_| ProviderError::InvalidApiKey)?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Turns a base64 image payload into a `data:` URI, sniffing the MIME type.
pub fn to_data_uri(image_base64: &str) -> Result<String, ProviderError> {
    let bytes = base64::decode(image_base64.trim())
        .map_err(|e| ProviderError::MalformedResponse(format!("invalid base64 image: {}", e)))?;
    if bytes.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "empty image payload".to_string(),
        ));
    }
    Ok(format!(
        "data:{};base64,{}",
        sniff_mime(&bytes),
        image_base64.trim()
    ))
}

pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/png"
    }
}

pub fn print_response(response: &GenerationResponse) {
    for image in &response.images {
        match &image.error {
            None => println!("{} {}  {}", "✔".green(), image.provider.bold(), summarize_url(&image.url)),
            Some(error) => println!("{} {}  {}", "✘".red(), image.provider.bold(), error.red()),
        }
    }
}

pub fn print_catalog() {
    for entry in catalog::entries() {
        println!("{}", entry.name.bold().green());
        for issue in entry.issues {
            println!("  - {}", issue);
        }
    }
}

fn summarize_url(url: &str) -> String {
    if url.starts_with("data:") {
        let mime = url
            .trim_start_matches("data:")
            .split(';')
            .next()
            .unwrap_or("image");
        format!("<inline {} image, {} bytes>", mime, url.len())
    } else {
        url.to_string()
    }
}

use crate::constants::PLACEHOLDER_URL;
use crate::error::AggregationContractError;
use crate::models::{GenerationResponse, ProviderResult};

/// Orders results by configuration and enforces one entry per provider.
pub fn aggregate(
    expected: &[&str],
    results: Vec<ProviderResult>,
) -> Result<GenerationResponse, AggregationContractError> {
    if results.len() != expected.len() {
        return Err(AggregationContractError(format!(
            "expected {} results, got {}",
            expected.len(),
            results.len()
        )));
    }

    let images = expected
        .iter()
        .zip(results)
        .enumerate()
        .map(|(position, (provider, result))| {
            if result.provider != *provider {
                return Err(AggregationContractError(format!(
                    "slot {} belongs to '{}' but holds a result from '{}'",
                    position, provider, result.provider
                )));
            }
            Ok(normalize(result))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerationResponse { images })
}

fn normalize(result: ProviderResult) -> ProviderResult {
    match result.error.as_deref().map(str::trim) {
        Some(error) if !error.is_empty() => ProviderResult::failure(result.provider, error),
        _ if result.url.trim().is_empty() => {
            ProviderResult::failure(result.provider, "provider returned no image")
        }
        _ if result.url == PLACEHOLDER_URL => {
            ProviderResult::failure(result.provider, "provider returned the placeholder image")
        }
        _ => ProviderResult::success(result.provider, result.url),
    }
}

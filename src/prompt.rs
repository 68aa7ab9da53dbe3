use crate::catalog::{canonical_city, canonical_issue};
use crate::error::InvalidInputError;
use crate::models::GenerationRequest;
use std::fmt;

const MAX_FRAGMENT_LEN: usize = 64;

/// Text sent to every provider for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn build(city: &str, issue: &str) -> Result<Prompt, InvalidInputError> {
    if city.trim().is_empty() {
        return Err(InvalidInputError::MissingField("city"));
    }
    if issue.trim().is_empty() {
        return Err(InvalidInputError::MissingField("issue"));
    }

    let city_name =
        canonical_city(city).ok_or_else(|| InvalidInputError::UnknownCity(city.trim().to_string()))?;
    let issue_name = canonical_issue(city_name, issue).ok_or_else(|| {
        InvalidInputError::IssueNotForCity {
            city: city_name.to_string(),
            issue: issue.trim().to_string(),
        }
    })?;

    let city_name = sanitize_fragment(city_name);
    let issue_name = sanitize_fragment(issue_name);
    Ok(Prompt(format!(
        "A photorealistic wide-angle view of {city} affected by {issue}. \
         Show how {issue_lower} changes the city's recognisable landmarks, streets and daily life, \
         in the style of documentary photography, natural light, no text or captions.",
        city = city_name,
        issue = issue_name,
        issue_lower = issue_name.to_lowercase(),
    )))
}

pub fn build_for(request: &GenerationRequest) -> Result<Prompt, InvalidInputError> {
    build(&request.city, &request.issue)
}

/// Restricts a template substitution to plain words.
pub fn sanitize_fragment(fragment: &str) -> String {
    let kept: String = fragment
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '\'' | ','))
        .collect();
    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_FRAGMENT_LEN)
        .collect()
}

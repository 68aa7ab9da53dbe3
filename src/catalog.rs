use serde::Serialize;

/// Supported cities, each with the climate issues that make sense for it.
const CATALOG: &[(&str, &[&str])] = &[
    ("London", &["Flooding", "Heatwaves", "Air Pollution"]),
    ("New York", &["Sea Level Rise", "Hurricanes", "Heatwaves"]),
    ("Tokyo", &["Typhoons", "Heatwaves", "Sea Level Rise"]),
    ("Mumbai", &["Flooding", "Extreme Heat", "Air Pollution"]),
    ("Sydney", &["Bushfires", "Drought", "Coral Bleaching"]),
    ("Cairo", &["Desertification", "Water Scarcity", "Extreme Heat"]),
    ("Jakarta", &["Land Subsidence", "Flooding", "Sea Level Rise"]),
    ("Los Angeles", &["Wildfires", "Drought", "Heatwaves"]),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityEntry {
    pub name: &'static str,
    pub issues: Vec<&'static str>,
}

pub fn entries() -> Vec<CityEntry> {
    CATALOG
        .iter()
        .map(|(name, issues)| CityEntry {
            name: *name,
            issues: issues.to_vec(),
        })
        .collect()
}

/// Canonical spelling of a supported city, matched case-insensitively.
pub fn canonical_city(city: &str) -> Option<&'static str> {
    let wanted = city.trim();
    CATALOG
        .iter()
        .map(|(name, _)| *name)
        .find(|name| name.eq_ignore_ascii_case(wanted))
}

pub fn issues_for(city: &str) -> Option<&'static [&'static str]> {
    let wanted = city.trim();
    CATALOG
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, issues)| *issues)
}

/// Canonical spelling of `issue` if it is listed for `city`.
pub fn canonical_issue(city: &str, issue: &str) -> Option<&'static str> {
    let wanted = issue.trim();
    issues_for(city)?
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
}

/// Splits command-line words into `(city, issue)`, taking the longest leading
/// run of words that names a supported city. Falls back to the first word.
pub fn split_city_words(words: &[String]) -> Option<(String, String)> {
    if words.len() < 2 {
        return None;
    }
    let city_len = (1..words.len())
        .rev()
        .find(|&len| canonical_city(&words[..len].join(" ")).is_some())
        .unwrap_or(1);
    Some((words[..city_len].join(" "), words[city_len..].join(" ")))
}

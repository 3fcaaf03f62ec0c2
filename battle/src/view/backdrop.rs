//! Arena background selection by terrain

use rand::Rng;
use rand::seq::SliceRandom;

/// Background file names suited to a terrain tag
pub fn terrain_files(terrain: &str) -> &'static [&'static str] {
    match terrain {
        "grass" => &["2.jpg", "3.jpg", "7.jpg"],
        "cave" | "mountain" => &["6.jpg"],
        "sand" => &["4.jpg"],
        "water" | "pond" => &["5.jpg"],
        "building" | "indoor" => &["1.jpg"],
        _ => &[],
    }
}

fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Pick one background uniformly at random.
///
/// With a terrain tag, only URLs whose file name is on that terrain's list
/// are considered; when none match (or the tag is unknown) the whole list is.
pub fn pick_background<'a, R: Rng + ?Sized>(
    urls: &'a [String],
    terrain: Option<&str>,
    rng: &mut R,
) -> Option<&'a str> {
    let allowed = terrain.map(terrain_files).unwrap_or(&[]);

    let filtered: Vec<&'a str> = urls
        .iter()
        .map(String::as_str)
        .filter(|url| allowed.iter().any(|name| *name == file_name(url)))
        .collect();

    if filtered.is_empty() {
        urls.choose(rng).map(String::as_str)
    } else {
        filtered.choose(rng).copied()
    }
}

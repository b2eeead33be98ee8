/// Storage-path prefix every stored player photo reference must carry.
pub const PHOTO_PREFIX: &str = "players/img/";

/// Converts a stored photo reference into a servable URL.
///
/// References outside the `players/img/` storage convention (including the
/// empty string for players without a photo) normalize to `""`.
pub fn photo_url(reference: &str) -> String {
    if reference.contains(PHOTO_PREFIX) {
        format!("/media/{}", reference)
    } else {
        String::new()
    }
}

/// Send the browser to `url`, replacing the current page.
pub fn navigate_to(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    window
        .location()
        .set_href(url)
        .map_err(|e| format!("Navigation to {} failed: {:?}", url, e))
}

pub mod theme;
pub mod tui;

/// Open a URL in the system's default browser. This is the one capability the
/// search core requests from its host but never implements itself.
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .spawn()?;
    }
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }
    Ok(())
}

/// Flaticon search page for a query; the empty-state escape hatch and the `o`
/// shortcut both land here.
pub fn provider_search_url(query: &str) -> String {
    if query.is_empty() {
        "https://www.flaticon.com/".to_string()
    } else {
        format!(
            "https://www.flaticon.com/search?word={}",
            urlencoding::encode(query)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_url_encodes_query() {
        assert_eq!(
            provider_search_url("wedding ring"),
            "https://www.flaticon.com/search?word=wedding%20ring"
        );
        assert_eq!(provider_search_url(""), "https://www.flaticon.com/");
    }
}

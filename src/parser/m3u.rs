//! Extended M3U channel parser
//!
//! The parser walks the playlist once, line by line, holding at most one
//! pending channel. An `#EXTINF:` directive opens a pending channel and the
//! next non-comment, non-blank line becomes its stream URL. Anything that does
//! not fit that shape is skipped rather than reported, so a damaged playlist
//! still yields every channel that can be recovered from it.
//!
//! ```text
//! #EXTM3U
//! #EXTINF:-1 tvg-id="bbc.uk" tvg-logo="L" group-title="News",BBC News
//! http://example.com/s.m3u8
//! ```

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{Channel, UNKNOWN_CHANNEL_NAME};

const EXTINF_PREFIX: &str = "#EXTINF:";

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z-]+)="([^"]*)""#).expect("attribute pattern is valid")
});

/// The `key="value"` attributes of a directive line that map onto a channel.
///
/// Keys are matched case-sensitively and a repeated key overwrites the earlier
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtinfAttributes {
    pub tvg_id: Option<String>,
    pub tvg_name: Option<String>,
    pub tvg_logo: Option<String>,
    pub group_title: Option<String>,
}

impl ExtinfAttributes {
    pub fn parse(line: &str) -> Self {
        let mut attrs = Self::default();

        for caps in ATTRIBUTE_REGEX.captures_iter(line) {
            let value = caps[2].to_string();
            match &caps[1] {
                "tvg-id" => attrs.tvg_id = Some(value),
                "tvg-name" => attrs.tvg_name = Some(value),
                "tvg-logo" => attrs.tvg_logo = Some(value),
                "group-title" => attrs.group_title = Some(value),
                _ => {}
            }
        }

        attrs
    }
}

/// Display name of a directive line: the trimmed text after its last comma.
///
/// A name containing a comma is truncated to its final segment.
fn extract_name(line: &str) -> String {
    line.rfind(',')
        .map(|pos| line[pos + 1..].trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_CHANNEL_NAME)
        .to_string()
}

fn parse_extinf_line(line: &str) -> Channel {
    let attrs = ExtinfAttributes::parse(line);
    Channel::pending(
        extract_name(line),
        attrs.tvg_logo,
        attrs.group_title,
        attrs.tvg_id,
    )
}

/// Physical lines of a playlist, numbered from 1.
///
/// `\n` and `\r\n` end a line, and so does a lone `\r`.
fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .strip_suffix('\r')
        .unwrap_or(content)
        .lines()
        .flat_map(|line| line.split('\r'))
        .enumerate()
        .map(|(index, line)| (index + 1, line))
}

/// Parse playlist text into the channels it describes, in source order.
///
/// Never fails. Directives without a following URL and URLs without a
/// preceding directive are dropped.
pub fn parse_m3u(content: &str) -> Vec<Channel> {
    let mut channels = Vec::new();
    let mut pending: Option<Channel> = None;
    let mut line_count = 0usize;

    for (line_number, raw) in numbered_lines(content) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;

        if line.starts_with(EXTINF_PREFIX) {
            let channel = parse_extinf_line(line);
            if let Some(dropped) = pending.replace(channel) {
                debug!(
                    "Dropping channel '{}' with no stream URL before directive at line {}",
                    dropped.name, line_number
                );
            }
        } else if line.starts_with('#') {
            continue;
        } else if let Some(mut channel) = pending.take() {
            channel.stream_url = line.to_string();
            channels.push(channel);
        } else {
            debug!("Ignoring stream URL without directive: {}", line);
        }
    }

    if let Some(dropped) = pending {
        debug!(
            "Dropping channel '{}' with no stream URL at end of playlist",
            dropped.name
        );
    }

    debug!(
        "Parsed {} channels from {} non-blank lines",
        channels.len(),
        line_count
    );
    channels
}

/// Parse playlist text, treating a playlist with no recoverable channels as
/// invalid input.
pub fn parse_playlist(content: &str) -> AppResult<Vec<Channel>> {
    let channels = parse_m3u(content);
    if channels.is_empty() {
        return Err(AppError::validation("No valid channels found in playlist"));
    }
    Ok(channels)
}

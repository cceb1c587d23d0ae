use crate::models::Channel;

/// Render channels as an extended M3U playlist.
///
/// Every directive carries all four attributes, even empty ones, so the
/// output parses back into the same channels.
pub fn generate_m3u(channels: &[Channel]) -> String {
    let mut m3u = String::from("#EXTM3U\n");

    for channel in channels {
        m3u.push_str(&format!(
            "#EXTINF:-1 tvg-id=\"{}\" tvg-name=\"{}\" tvg-logo=\"{}\" group-title=\"{}\",{}\n",
            channel.epg_id, channel.name, channel.logo, channel.category, channel.name
        ));
        m3u.push_str(&channel.stream_url);
        m3u.push('\n');
    }

    m3u
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_channels;
    use crate::parser::parse_m3u;
    use proptest::prelude::*;

    #[test]
    fn test_generate_empty_playlist() {
        assert_eq!(generate_m3u(&[]), "#EXTM3U\n");
    }

    #[test]
    fn test_generate_single_channel() {
        let channel = Channel {
            name: "Test Stream".to_string(),
            logo: String::new(),
            category: "Test".to_string(),
            epg_id: "test.stream".to_string(),
            stream_url: "https://example.com/live.m3u8".to_string(),
        };

        assert_eq!(
            generate_m3u(&[channel]),
            "#EXTM3U\n\
             #EXTINF:-1 tvg-id=\"test.stream\" tvg-name=\"Test Stream\" tvg-logo=\"\" group-title=\"Test\",Test Stream\n\
             https://example.com/live.m3u8\n"
        );
    }

    #[test]
    fn test_sample_channels_survive_reparse() {
        let channels = sample_channels();
        assert_eq!(parse_m3u(&generate_m3u(&channels)), channels);
    }

    fn channel_strategy() -> impl Strategy<Value = Channel> {
        (
            "[A-Za-z0-9][A-Za-z0-9 .&'-]{0,20}[A-Za-z0-9]",
            "(https?://[a-z0-9./_-]{1,30})?",
            "[A-Za-z0-9][A-Za-z0-9 ,/&-]{0,15}",
            "[a-z0-9][a-z0-9._-]{0,15}",
            "https?://[a-z0-9./_?=&-]{1,40}",
        )
            .prop_map(|(name, logo, category, epg_id, stream_url)| Channel {
                name,
                logo,
                category,
                epg_id,
                stream_url,
            })
    }

    proptest! {
        #[test]
        fn prop_generated_playlist_parses_back(channels in prop::collection::vec(channel_strategy(), 0..8)) {
            prop_assert_eq!(parse_m3u(&generate_m3u(&channels)), channels);
        }
    }
}

//! Fixture channels the server starts with before any playlist is uploaded

use super::Channel;

fn sample(name: &str, logo: &str, stream_url: &str, category: &str, epg_id: &str) -> Channel {
    Channel {
        name: name.to_string(),
        logo: logo.to_string(),
        category: category.to_string(),
        epg_id: epg_id.to_string(),
        stream_url: stream_url.to_string(),
    }
}

pub fn sample_channels() -> Vec<Channel> {
    vec![
        sample(
            "BBC News",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/7/77/BBC_News_2022_%28Alt%29_logo.svg/1200px-BBC_News_2022_%28Alt%29_logo.svg.png",
            "https://test-streams.mux.dev/x36xhzz/x36xhzz.m3u8",
            "News",
            "bbcnews.uk",
        ),
        sample(
            "Euronews",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a3/Euronews_2018_logo.svg/1200px-Euronews_2018_logo.svg.png",
            "https://evengh.live/hls/eng/index.m3u8",
            "News",
            "euronews.com",
        ),
        sample(
            "NASA Live",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e5/NASA_logo.svg/1200px-NASA_logo.svg.png",
            "https://nasatv-lh.akamaihd.net/i/NASA_101@319270/index_1_av-p.m3u8?sd=10&rebase=on",
            "Science",
            "nasa.gov",
        ),
        sample(
            "Test Stream",
            "",
            "https://test-streams.mux.dev/x36xhzz/x36xhzz.m3u8",
            "Test",
            "test.stream",
        ),
    ]
}

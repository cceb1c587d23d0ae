//! Placeholder programme guide
//!
//! There is no real guide source behind the server. Every channel gets the
//! same daily schedule so the front end has something to lay out.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::models::{Channel, EpgData, EpgProgram};

struct ScheduleSlot {
    title: &'static str,
    start_hour: u32,
    end_hour: u32,
    description: &'static str,
}

const DAILY_SCHEDULE: &[ScheduleSlot] = &[
    ScheduleSlot {
        title: "Morning Show",
        start_hour: 6,
        end_hour: 9,
        description: "Start your day with our morning program",
    },
    ScheduleSlot {
        title: "News Hour",
        start_hour: 9,
        end_hour: 10,
        description: "Latest news and current events",
    },
    ScheduleSlot {
        title: "Documentary Series",
        start_hour: 10,
        end_hour: 12,
        description: "Educational documentaries",
    },
    ScheduleSlot {
        title: "Afternoon Programming",
        start_hour: 12,
        end_hour: 15,
        description: "Various programs throughout the afternoon",
    },
    ScheduleSlot {
        title: "Evening News",
        start_hour: 18,
        end_hour: 19,
        description: "Evening news broadcast",
    },
    ScheduleSlot {
        title: "Prime Time",
        start_hour: 20,
        end_hour: 23,
        description: "Prime time entertainment",
    },
];

/// `YYYYMMDDHHMMSS` for the top of the given hour
fn xmltv_timestamp(date: NaiveDate, hour: u32) -> String {
    format!("{}{:02}0000", date.format("%Y%m%d"), hour)
}

fn programs_for_day(date: NaiveDate) -> impl Iterator<Item = EpgProgram> {
    DAILY_SCHEDULE.iter().map(move |slot| EpgProgram {
        title: slot.title.to_string(),
        start: xmltv_timestamp(date, slot.start_hour),
        end: xmltv_timestamp(date, slot.end_hour),
        description: slot.description.to_string(),
    })
}

/// Build guide data for `days` consecutive days starting at `today`.
///
/// Channels sharing an EPG id collapse into one entry; the later channel
/// replaces the earlier one's schedule.
pub fn generate_epg(channels: &[Channel], today: NaiveDate, days: u32) -> EpgData {
    let dates: Vec<NaiveDate> = (0..days)
        .filter_map(|offset| today.checked_add_days(Days::new(u64::from(offset))))
        .collect();

    let mut epg = EpgData::new();
    for channel in channels {
        let programs: Vec<EpgProgram> =
            dates.iter().flat_map(|date| programs_for_day(*date)).collect();
        epg.insert(channel.guide_id(), programs);
    }

    debug!(
        "Generated guide with {} entries over {} days",
        epg.len(),
        dates.len()
    );
    epg
}

/// Guide entries for a single EPG id; empty when the id is unknown.
pub fn programs_for_channel(
    channels: &[Channel],
    epg_id: &str,
    today: NaiveDate,
    days: u32,
) -> Vec<EpgProgram> {
    let matching: Vec<Channel> = channels
        .iter()
        .filter(|c| c.guide_id() == epg_id)
        .cloned()
        .collect();

    generate_epg(&matching, today, days)
        .remove(epg_id)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_channels;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_channel_gets_six_programs_per_day() {
        let channels = sample_channels();
        let epg = generate_epg(&channels, date(2024, 3, 10), 2);

        assert_eq!(epg.len(), channels.len());
        for channel in &channels {
            assert_eq!(epg[&channel.epg_id].len(), 12);
        }
    }

    #[test]
    fn test_program_timestamps() {
        let epg = generate_epg(&sample_channels(), date(2024, 12, 31), 2);
        let programs = &epg["bbcnews.uk"];

        assert_eq!(programs[0].title, "Morning Show");
        assert_eq!(programs[0].start, "20241231060000");
        assert_eq!(programs[0].end, "20241231090000");
        assert_eq!(programs[5].title, "Prime Time");
        assert_eq!(programs[5].end, "20241231230000");
        assert_eq!(programs[6].start, "20250101060000");
    }

    #[test]
    fn test_empty_epg_id_uses_normalized_name() {
        let channel = Channel {
            name: "My Channel".to_string(),
            logo: String::new(),
            category: "Test".to_string(),
            epg_id: String::new(),
            stream_url: "http://a/1".to_string(),
        };

        let epg = generate_epg(&[channel], date(2024, 1, 1), 1);
        assert_eq!(epg["my_channel"].len(), 6);
    }

    #[test]
    fn test_duplicate_epg_ids_collide() {
        let mut channels = sample_channels();
        channels[1].epg_id = channels[0].epg_id.clone();

        let epg = generate_epg(&channels, date(2024, 1, 1), 1);
        assert_eq!(epg.len(), 3);
        assert_eq!(epg["bbcnews.uk"].len(), 6);
    }

    #[test]
    fn test_programs_for_unknown_channel_is_empty() {
        let programs = programs_for_channel(&sample_channels(), "nope", date(2024, 1, 1), 2);
        assert!(programs.is_empty());
    }

    #[test]
    fn test_programs_for_known_channel() {
        let programs = programs_for_channel(&sample_channels(), "nasa.gov", date(2024, 1, 1), 2);
        assert_eq!(programs.len(), 12);
    }
}

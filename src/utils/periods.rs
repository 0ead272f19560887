use crate::models::{PeriodDescriptor, PeriodPhase, SeriesStatus};

/// Series length needed to win a best-of-seven round
const WINS_TO_CLINCH_SERIES: u8 = 4;

/// Label for the current or final period: `1st`, `2nd`, `3rd`, `SO`, `2OT`,
/// or the bare phase tag when nothing else fits.
pub fn period_label(period: &PeriodDescriptor) -> String {
    if period.period_type == PeriodPhase::Shootout {
        return "SO".to_string();
    }
    match period.number {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => match (&period.period_type, period.ot_periods) {
            (PeriodPhase::Overtime, Some(n)) if n > 0 => format!("{}OT", n),
            (phase, _) => phase.tag().to_string(),
        },
    }
}

/// `Tied 1-1`, `VAN leads 1-0` or `VAN wins 4-2`
pub fn series_summary(series: &SeriesStatus) -> String {
    let top = series.top_seed_wins;
    let bottom = series.bottom_seed_wins;
    if top == bottom {
        return format!("Tied {}-{}", top, bottom);
    }

    let (leader, leader_wins, trailer_wins) = if top > bottom {
        (&series.top_seed_team_abbrev, top, bottom)
    } else {
        (&series.bottom_seed_team_abbrev, bottom, top)
    };

    if leader_wins >= WINS_TO_CLINCH_SERIES {
        format!("{} wins {}-{}", leader, leader_wins, trailer_wins)
    } else {
        format!("{} leads {}-{}", leader, leader_wins, trailer_wins)
    }
}

/// Status suffix for playoff games, e.g. ` - R1 Game 2 (VAN leads 1-0)`
pub fn series_suffix(series: &SeriesStatus) -> String {
    format!(
        " - {} Game {} ({})",
        series.series_abbrev,
        series.game_number(),
        series_summary(series)
    )
}

//! CSV export of statistics and unit surveys.

use std::io::Write;
use survey_model::catalog::{GrowthWings, OptionList};
use survey_model::stats::MonthlyStats;
use survey_model::UnitSurvey;

const MONTHLY_HEADER: [&str; 9] = [
    "month",
    "year",
    "district",
    "area",
    "unit",
    "meetings_held",
    "attendance",
    "new_members",
    "activities",
];

/// One row per submitted survey in the monthly statistics.
pub fn write_monthly_csv<W: Write>(out: W, monthly: &MonthlyStats) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(MONTHLY_HEADER)?;
    for s in &monthly.surveys {
        wtr.write_record([
            s.month.clone(),
            s.year.map(|y| y.to_string()).unwrap_or_default(),
            s.district.clone(),
            s.area.clone(),
            s.unit.clone(),
            s.meetings_held.to_string(),
            s.attendance.to_string(),
            s.new_members.to_string(),
            s.activities.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row per unit survey; growth columns follow catalog order and
/// unanswered counts are written as 0.
pub fn write_unit_surveys_csv<W: Write>(out: W, surveys: &[UnitSurvey]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    let mut header: Vec<String> = [
        "id",
        "month",
        "year",
        "district",
        "area",
        "unit",
        "rukkun",
        "karkun",
        "active_associate",
        "codes",
        "spoken_male",
        "spoken_female",
        "new_members_male",
        "new_members_female",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    header.extend(GrowthWings::ID.choices().iter().map(|c| c.key.to_string()));
    wtr.write_record(&header)?;

    for survey in surveys {
        let s = survey.for_submission();
        let mut row = vec![
            s.id.clone().unwrap_or_default(),
            s.month.clone(),
            s.year.to_string(),
            s.district.clone(),
            s.area.clone(),
            s.component.clone(),
            s.workers.rukkun.or_zero().to_string(),
            s.workers.karkun.or_zero().to_string(),
            s.workers.active_associate.or_zero().to_string(),
            s.part_a.codes.or_zero().to_string(),
            s.part_a.spoken_persons.male.or_zero().to_string(),
            s.part_a.spoken_persons.female.or_zero().to_string(),
            s.part_b.new_jih_members.male.or_zero().to_string(),
            s.part_b.new_jih_members.female.or_zero().to_string(),
        ];
        row.extend(
            s.part_c
                .growth_acceleration
                .values()
                .map(|c| c.or_zero().to_string()),
        );
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::stats::MonthlySurveyStat;
    use survey_model::Count;

    #[test]
    fn monthly_rows_follow_header() {
        let monthly = MonthlyStats {
            surveys: vec![MonthlySurveyStat {
                month: "May".into(),
                year: Some(2024),
                district: "Kozhikode".into(),
                attendance: 40,
                ..MonthlySurveyStat::default()
            }],
            ..MonthlyStats::default()
        };
        let mut buf = Vec::new();
        write_monthly_csv(&mut buf, &monthly).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "month,year,district,area,unit,meetings_held,attendance,new_members,activities"
        );
        assert_eq!(lines.next().unwrap(), "May,2024,Kozhikode,,,0,40,0,0");
        assert!(lines.next().is_none());
    }

    #[test]
    fn unit_rows_write_blank_counts_as_zero() {
        let mut survey = UnitSurvey {
            id: Some("s1".into()),
            month: "June".into(),
            year: 2024,
            component: "Chungam".into(),
            ..UnitSurvey::default()
        };
        survey.workers.karkun = Count::Value(4);
        let first_wing = GrowthWings::ID.choices()[0].key;
        survey
            .part_c
            .growth_acceleration
            .set(first_wing, Count::Value(2))
            .unwrap();

        let mut buf = Vec::new();
        write_unit_surveys_csv(&mut buf, &[survey]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let header = rdr.headers().unwrap().clone();
        let row = rdr.records().next().unwrap().unwrap();

        let column = |name: &str| header.iter().position(|h| h == name).unwrap();
        assert_eq!(&row[column("unit")], "Chungam");
        assert_eq!(&row[column("rukkun")], "0");
        assert_eq!(&row[column("karkun")], "4");
        assert_eq!(&row[column(first_wing)], "2");
        assert_eq!(header.len(), 14 + GrowthWings::ID.choices().len());
    }
}

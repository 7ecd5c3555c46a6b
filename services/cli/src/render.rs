use health_screen::workflows::screening::{
    AnalysisResult, QuestionnaireField, RiskAssessment, ScreeningError,
};
use serde::Serialize;
use std::fmt::Write;

/// Entry in the JSON batch output; exactly one of `result` or `error` is set.
#[derive(Debug, Serialize)]
pub(crate) struct BatchEntry<'a> {
    pub(crate) questionnaire: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) result: Option<&'a AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

pub(crate) fn render_batch_json(
    results: &[Result<AnalysisResult, ScreeningError>],
) -> Result<String, serde_json::Error> {
    let entries: Vec<BatchEntry<'_>> = results
        .iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(analysis) => BatchEntry {
                questionnaire: index + 1,
                result: Some(analysis),
                error: None,
            },
            Err(err) => BatchEntry {
                questionnaire: index + 1,
                result: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

pub(crate) fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Screening report: {}", result.patient_name);
    let _ = writeln!(
        out,
        "Age {}, {}, assessed {}",
        result.age,
        result.sex.label(),
        result.assessed_at_label()
    );
    let _ = writeln!(
        out,
        "BMI {:.1} ({}), WHtR {:.2} ({})",
        result.bmi,
        result.bmi_category.label(),
        result.whtr,
        result.whtr_category.label()
    );

    render_assessment(&mut out, &result.cardiovascular);
    render_assessment(&mut out, &result.colorectal);

    if result.alerts.is_empty() {
        let _ = writeln!(out, "\nAlerts: none");
    } else {
        let _ = writeln!(out, "\nAlerts");
        for alert in &result.alerts {
            let _ = writeln!(out, "- {alert}");
        }
    }

    let _ = writeln!(out, "\nAction plan");
    for message in result.action_plan_messages() {
        let _ = writeln!(out, "- {message}");
    }

    let _ = writeln!(out, "\n{}", result.synthesis);
    out
}

fn render_assessment(out: &mut String, assessment: &RiskAssessment) {
    let domain = assessment.domain.label();
    let mut title = domain.chars();
    let title = match title.next() {
        Some(first) => first.to_uppercase().chain(title).collect::<String>(),
        None => String::new(),
    };
    let _ = writeln!(
        out,
        "\n{} risk: {} (score {})",
        title, assessment.level_label, assessment.score
    );
    for component in &assessment.components {
        let _ = writeln!(out, "- {}", component.summary());
    }
}

pub(crate) fn render_field_reference() -> String {
    let mut out = String::new();
    for field in QuestionnaireField::ALL {
        let requirement = if field.is_required() {
            "required"
        } else {
            "optional"
        };
        let tokens = field.accepted_tokens();
        if tokens.is_empty() {
            let _ = writeln!(out, "{:<22} {}", field.key(), requirement);
        } else {
            let _ = writeln!(
                out,
                "{:<22} {} [{}]",
                field.key(),
                requirement,
                tokens.join(", ")
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use health_screen::workflows::screening::{QuestionnaireField, RawAnswers, ScreeningService};

    fn answers() -> RawAnswers {
        RawAnswers::from_pairs([
            ("nom_patient", "Henri Dubois"),
            ("age", "70"),
            ("sexe", "homme"),
            ("poids", "90"),
            ("taille", "180"),
            ("tour_taille", "105"),
            ("tabac", "oui"),
            ("hypertension", "oui"),
            ("diabete", "non"),
            ("cholesterol", "non"),
            ("antecedents_cardio", "non"),
            ("activite_physique", "non"),
            ("alcool", "aucun"),
            ("symptomes_cardio", "non"),
            ("antecedents_colon", "non"),
            ("symptomes_digestifs", "non"),
            ("sang_selles", "oui"),
            ("depistage_colon", "jamais"),
            ("fibres", "oui"),
            ("viandes_transformees", "non"),
        ])
    }

    fn assessed() -> AnalysisResult {
        let at = Local
            .with_ymd_and_hms(2026, 5, 2, 16, 5, 0)
            .single()
            .expect("unambiguous local time");
        ScreeningService::default()
            .assess_at(&answers(), at)
            .expect("valid answers")
    }

    #[test]
    fn report_lists_trails_alerts_and_plan() {
        let report = render_report(&assessed());

        assert!(report.starts_with("Screening report: Henri Dubois\n"));
        assert!(report.contains("assessed 02/05/2026 16:05"));
        assert!(report.contains("Cardiovascular risk: Very high (score 15)"));
        assert!(report.contains("- +3: active smoking"));
        assert!(report.contains("Colorectal risk: High (score 11)"));
        assert!(report.contains("- blood in stool reported: priority medical evaluation."));
        assert!(report.contains("Schedule a medical cardiovascular workup"));
        assert!(report.trim_end().ends_with("(score 11)."));
    }

    #[test]
    fn batch_json_marks_rejected_questionnaires() {
        let service = ScreeningService::default();
        let invalid = answers().with(QuestionnaireField::Waist, "0");
        let results = service.assess_batch(&[answers(), invalid]);

        let json = render_batch_json(&results).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value[0]["questionnaire"], 1);
        assert_eq!(value[0]["result"]["cardiovascular"]["score"], 15);
        assert!(value[0].get("error").is_none());
        assert_eq!(value[1]["questionnaire"], 2);
        assert!(value[1]["error"]
            .as_str()
            .expect("error message")
            .contains("tour_taille"));
    }

    #[test]
    fn field_reference_covers_every_field() {
        let reference = render_field_reference();

        assert_eq!(reference.lines().count(), 20);
        assert!(reference.starts_with("nom_patient"));
        assert!(reference.contains("optional"));
        assert!(reference.contains("depistage_colon"));
        assert!(reference.contains("plus_2_ans"));
    }
}

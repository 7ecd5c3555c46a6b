//! End-to-end screening scenarios exercised through the public service and importer.

use std::io::Cursor;

use health_screen::workflows::import::{InputFormat, QuestionnaireImporter};
use health_screen::workflows::screening::{
    QuestionnaireField, RawAnswers, Recommendation, RiskFactor, RiskLevel, ScreeningError,
    ScreeningService, ValidationError,
};

const HEADER: &str = "nom_patient,age,sexe,poids,taille,tour_taille,tabac,hypertension,diabete,\
cholesterol,antecedents_cardio,activite_physique,alcool,symptomes_cardio,antecedents_colon,\
symptomes_digestifs,sang_selles,depistage_colon,fibres,viandes_transformees";

fn reference_csv() -> String {
    format!(
        "{HEADER}\n\
         Henri Dubois,70,homme,90,180,105,oui,oui,non,non,non,non,aucun,non,non,non,non,moins_2_ans,oui,non\n\
         ,30,femme,70,175,80,non,non,non,non,non,oui,aucun,non,non,non,non,moins_2_ans,oui,non\n\
         Lucie Bernard,0,femme,60,165,70,non,non,non,non,non,oui,aucun,non,non,non,non,jamais,oui,non\n"
    )
}

fn import_reference_batch() -> Vec<RawAnswers> {
    QuestionnaireImporter::from_reader(Cursor::new(reference_csv()), InputFormat::Csv)
        .expect("reference csv imports")
}

#[test]
fn sedentary_smoker_with_hypertension_scores_very_high() {
    let batch = import_reference_batch();
    let service = ScreeningService::default();

    let result = service.assess(&batch[0]).expect("valid questionnaire");

    assert_eq!(result.bmi, 27.8);
    assert_eq!(result.bmi_category.label(), "Surpoids");
    assert_eq!(result.whtr_category.label(), "intermediate metabolic risk");
    assert_eq!(result.cardiovascular.score, 15);
    assert_eq!(result.cardiovascular.level, RiskLevel::VeryHigh);
    assert!(result
        .cardiovascular
        .components
        .iter()
        .all(|component| component.factor != RiskFactor::NoneIdentified));
    assert!(result
        .action_plan
        .contains(&Recommendation::CardiovascularWorkup));
}

#[test]
fn protective_answers_score_zero_everywhere() {
    let batch = import_reference_batch();
    let service = ScreeningService::default();

    let result = service.assess(&batch[1]).expect("valid questionnaire");

    assert_eq!(result.patient_name, "Patient");
    assert_eq!(result.cardiovascular.score, 0);
    assert_eq!(result.cardiovascular.level, RiskLevel::Low);
    assert_eq!(result.cardiovascular.components.len(), 1);
    assert_eq!(result.colorectal.score, 0);
    assert_eq!(result.colorectal.level, RiskLevel::Low);
    assert!(result.alerts.is_empty());
    assert_eq!(
        result.action_plan_messages(),
        vec!["Maintain protective habits and repeat the assessment in 6 to 12 months."]
    );
    assert_eq!(
        result.synthesis,
        "BMI 22.9 (Corpulence normale), WHtR 0.46 (low metabolic risk). \
         Cardiovascular risk Low (score 0) and colorectal risk Low (score 0)."
    );
}

#[test]
fn invalid_row_is_rejected_without_affecting_the_batch() {
    let batch = import_reference_batch();

    let results = ScreeningService::default().assess_batch(&batch);

    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert_eq!(
        results[2].as_ref().expect_err("age 0 is invalid"),
        &ScreeningError::Validation(ValidationError::InvalidValue {
            field: QuestionnaireField::Age,
            value: "0".to_string(),
        })
    );
}

#[test]
fn json_export_round_trips_through_serde() {
    let json = r#"{
        "nom_patient": "Marc", "age": 58, "sexe": "homme", "poids": "82,4", "taille": 176,
        "tour_taille": 99, "tabac": "non", "hypertension": "oui", "diabete": "non",
        "cholesterol": "oui", "antecedents_cardio": "non", "activite_physique": "oui",
        "alcool": "modere", "symptomes_cardio": "non", "antecedents_colon": "oui",
        "symptomes_digestifs": "non", "sang_selles": "non", "depistage_colon": "plus_2_ans",
        "fibres": "non", "viandes_transformees": "oui"
    }"#;
    let batch = QuestionnaireImporter::from_reader(Cursor::new(json), InputFormat::Json)
        .expect("json imports");

    let result = ScreeningService::default()
        .assess(&batch[0])
        .expect("valid questionnaire");

    // age 2, hypertension 3, cholesterol 2, moderate alcohol 1, BMI 26.6 -> 1, WHtR 0.5625 -> 1
    assert_eq!(result.cardiovascular.score, 10);
    assert_eq!(result.cardiovascular.level_label, "High");
    // age 2, family history 3, overdue screening 2, low fibre 1, processed meat 1
    assert_eq!(result.colorectal.score, 9);
    assert_eq!(result.colorectal.level, RiskLevel::High);

    let exported = serde_json::to_string(&result).expect("result serializes");
    let restored: health_screen::workflows::screening::AnalysisResult =
        serde_json::from_str(&exported).expect("result deserializes");
    assert_eq!(restored.synthesis, result.synthesis);
    assert_eq!(restored.action_plan, result.action_plan);
}

use crate::render::{render_batch_json, render_report};
use clap::Args;
use health_screen::error::AppError;
use health_screen::workflows::screening::{RawAnswers, ScreeningService};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print results as JSON instead of text reports
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(service: &ScreeningService, args: DemoArgs) -> Result<(), AppError> {
    let batch = [sedentary_smoker(), protective_profile()];
    let results = service.assess_batch(&batch);

    if args.json {
        println!("{}", render_batch_json(&results)?);
        return Ok(());
    }

    println!("Screening demo: reference questionnaires\n");
    for result in results {
        let analysis = result?;
        println!("{}", render_report(&analysis));
    }
    Ok(())
}

/// Seventy-year-old sedentary male smoker with known hypertension and a 105 cm waist.
pub(crate) fn sedentary_smoker() -> RawAnswers {
    RawAnswers::from_pairs([
        ("nom_patient", "Reference A"),
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
        ("sang_selles", "non"),
        ("depistage_colon", "moins_2_ans"),
        ("fibres", "oui"),
        ("viandes_transformees", "non"),
    ])
}

/// Thirty-year-old with protective answers throughout.
pub(crate) fn protective_profile() -> RawAnswers {
    RawAnswers::from_pairs([
        ("nom_patient", "Reference B"),
        ("age", "30"),
        ("sexe", "femme"),
        ("poids", "70"),
        ("taille", "175"),
        ("tour_taille", "80"),
        ("tabac", "non"),
        ("hypertension", "non"),
        ("diabete", "non"),
        ("cholesterol", "non"),
        ("antecedents_cardio", "non"),
        ("activite_physique", "oui"),
        ("alcool", "aucun"),
        ("symptomes_cardio", "non"),
        ("antecedents_colon", "non"),
        ("symptomes_digestifs", "non"),
        ("sang_selles", "non"),
        ("depistage_colon", "moins_2_ans"),
        ("fibres", "oui"),
        ("viandes_transformees", "non"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_screen::workflows::screening::{Recommendation, RiskLevel};

    #[test]
    fn reference_questionnaires_match_expected_levels() {
        let service = ScreeningService::default();

        let smoker = service.assess(&sedentary_smoker()).expect("valid");
        assert_eq!(smoker.cardiovascular.score, 15);
        assert_eq!(smoker.cardiovascular.level, RiskLevel::VeryHigh);

        let protective = service.assess(&protective_profile()).expect("valid");
        assert_eq!(protective.cardiovascular.score, 0);
        assert_eq!(protective.colorectal.score, 0);
        assert_eq!(protective.action_plan, vec![Recommendation::MaintainHabits]);
    }
}

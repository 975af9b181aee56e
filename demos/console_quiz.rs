//! Scripted console run of the quiz core.
//!
//! Plays one full round over the built-in catalog with a simulated
//! player who picks a random option for every question, then prints
//! the exporter snapshot.
//!
//! Run with: `cargo run --example console_quiz`

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rohe::catalog::RegionCatalog;
use rohe::QuizSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = RegionCatalog::aotearoa();
    let region_ids: Vec<String> = catalog
        .all_regions()
        .iter()
        .map(|region| region.id.clone())
        .collect();

    let mut session = QuizSession::builder().catalog(catalog).seed(42).build()?;
    let mut player = StdRng::seed_from_u64(1);

    for region_id in &region_ids {
        let question = session.open_question(region_id)?;
        println!("{}", question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        let choice = question
            .options
            .choose(&mut player)
            .cloned()
            .unwrap_or_else(|| question.correct_answer.clone());
        let outcome = session.submit_answer(&choice)?;

        if outcome.was_correct {
            println!("  -> {choice} ... correct!\n");
        } else {
            println!(
                "  -> {choice} ... incorrect, the answer was {}\n",
                outcome.correct_answer
            );
        }
    }

    let snapshot = session.snapshot();
    println!("The Quiz Is Finished!");
    println!("{}", snapshot.summary_line());
    println!("\nExporter snapshot:\n{}", snapshot.to_json()?);

    Ok(())
}

use life_coach_agent::{
    agent::{LifeCoach, DEFAULT_DAILY_TARGET},
    providers::{SimulatedDevice, SimulatedFeed},
};
use rand::Rng;
use std::env;
use tracing::info;

fn daily_target_from_env() -> u32 {
    env::var("COACH_DAILY_TARGET")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_DAILY_TARGET)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("AI Life Coach starting");

    let device = Box::new(SimulatedDevice::new());
    let feed = Box::new(SimulatedFeed);
    let mut coach = LifeCoach::new(device, feed, daily_target_from_env());

    println!("{}", coach.start_session());

    // Scripted conversation scenarios
    let scenarios = [
        "I'm feeling really depressed about my financial situation",
        "I need to find ways to make money online",
        "Help me plan my career transition to remote work",
        "I applied to some jobs but haven't heard back",
    ];

    let mut rng = rand::thread_rng();

    for (i, scenario) in scenarios.iter().enumerate() {
        println!("\n{}", "=".repeat(60));
        println!("USER MESSAGE {}: {}", i + 1, scenario);
        println!("{}", "=".repeat(60));

        match coach.handle_message(scenario) {
            Ok(reply) => println!("{}", reply),
            Err(e) => {
                eprintln!("Interaction failed: {}", e);
                return Err(Box::new(e) as Box<dyn std::error::Error>);
            }
        }

        // Simulate progress between interactions
        let tracker = coach.tracker_mut();
        tracker.add_opportunities_found(2);
        tracker.add_applications_sent(1);
        tracker.add_mood_improvement(0.1);
        tracker.add_income_generated(rng.gen_range(1000..=5000) as f64);
    }

    println!("\n{}", "=".repeat(60));
    println!("DAILY REPORT");
    println!("{}", "=".repeat(60));
    println!("{}", coach.daily_report()?);

    let stats = coach.session_stats();
    info!(
        messages = stats.message_count,
        moods = stats.mood_entry_count,
        transcript_hash = %coach.transcript_hash(),
        "Session complete"
    );

    Ok(())
}

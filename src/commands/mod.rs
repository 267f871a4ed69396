use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::error::InputError;
use crate::food::analysis::session::PickOutcome;
use crate::food::analysis::synergy::{SynergyAnalysis, SynergyAnalyzer};
use crate::food::analysis::{AnalyzerSession, IngredientSlots};
use crate::food::catalog::{catalog, find_by_rank};
use crate::food::filter::{filter_dashboard, filter_database, CategoryFilter, GoalFilter};
use crate::llm::chat::{ChatClient, ChatSession};
use crate::providers::traits::Role;

mod food_cmd;
mod system;

pub struct CommandHandler {
    analyzer: SynergyAnalyzer,
    session: AnalyzerSession,
    slots: IngredientSlots,
    chat: ChatSession,
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

impl CommandHandler {
    pub fn new(analyzer: SynergyAnalyzer, chat: ChatClient) -> Self {
        Self {
            session: AnalyzerSession::new(analyzer.clone()),
            analyzer,
            slots: IngredientSlots::new("Turmeric", "Black Pepper", ""),
            chat: ChatSession::new(chat),
        }
    }

    pub async fn handle_command(&mut self, input: &str) -> Result<(), String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command.to_lowercase().as_str() {
            "help" | "exit" | "quit" if rest.is_empty() => system::handle_command(command),
            "goals" => {
                food_cmd::print_goals();
                Ok(())
            }
            "list" => {
                let goal = GoalFilter::parse((!rest.is_empty()).then_some(rest));
                food_cmd::print_records(&filter_dashboard(catalog(), &goal, None));
                Ok(())
            }
            "search" => {
                food_cmd::print_records(&filter_dashboard(catalog(), &GoalFilter::All, Some(rest)));
                Ok(())
            }
            "db" => self.database(rest),
            "show" => self.show(rest).await,
            "analyze" => {
                let parts: Vec<&str> = rest.split(',').collect();
                if parts.len() > 3 {
                    return Err(InputError::TooManyIngredients.to_string());
                }
                self.slots = IngredientSlots::default();
                for (index, part) in parts.iter().enumerate() {
                    self.slots.set(index, part.trim());
                }
                self.run_analysis().await
            }
            "run" => self.run_analysis().await,
            "pick" => {
                if rest.is_empty() {
                    return Err("Please specify a food to pick.".to_string());
                }
                if self.slots.pick(rest) == PickOutcome::Restarted {
                    self.session.clear();
                }
                self.print_slots();
                Ok(())
            }
            "slots" => {
                self.print_slots();
                Ok(())
            }
            "result" => {
                self.print_state();
                Ok(())
            }
            "dismiss" => {
                self.session.dismiss_error();
                Ok(())
            }
            "samples" => {
                food_cmd::print_samples();
                Ok(())
            }
            "history" => {
                for message in self.chat.messages() {
                    self.print_message(message.role, &message.text);
                }
                Ok(())
            }
            "chat" => self.send_chat(rest).await,
            _ => self.send_chat(input).await,
        }
    }

    fn database(&self, rest: &str) -> Result<(), String> {
        let (first, remainder) = match rest.split_once(char::is_whitespace) {
            Some((first, remainder)) => (first, remainder.trim()),
            None => (rest, ""),
        };

        let (category, query) = match first.parse::<CategoryFilter>() {
            Ok(category) => (category, remainder),
            Err(_) => (CategoryFilter::All, rest),
        };

        food_cmd::print_database_filters();
        println!("Showing: {}", category.label().cyan());
        food_cmd::print_records(&filter_database(catalog(), category, Some(query)));
        Ok(())
    }

    async fn show(&self, rest: &str) -> Result<(), String> {
        let rank: u32 = rest
            .parse()
            .map_err(|_| "Please give a rank number, e.g. show 6".to_string())?;

        let records = find_by_rank(rank);
        if records.is_empty() {
            return Err(format!("No combination with rank {}", rank));
        }

        for record in records {
            println!(
                "{} {}",
                format!("#{}", record.rank).dimmed(),
                format!("{:?} · {} · {}", record.kind(), record.evidence, record.tags.join(", ")).dimmed()
            );

            let bar = spinner(&format!("Analyzing {}...", record.ingredients.join(" + ")));
            let result = self.analyzer.analyze_synergy(record.ingredients.as_slice()).await;
            bar.finish_and_clear();

            match result {
                Ok(analysis) => food_cmd::print_analysis(&analysis),
                Err(e) => {
                    food_cmd::print_analysis(&SynergyAnalysis::placeholder_for(record));
                    println!("{}", e.to_string().red());
                }
            }
        }
        Ok(())
    }

    async fn run_analysis(&mut self) -> Result<(), String> {
        if !self.slots.is_ready() {
            return Err("Please input at least two ingredients.".to_string());
        }

        let ingredients = self.slots.ingredients();
        let bar = spinner(&format!(
            "Analyzing {:?}: {}...",
            self.slots.kind(),
            ingredients.join(" + ")
        ));
        let outcome = self.session.submit(ingredients.as_slice()).await;
        bar.finish_and_clear();

        outcome.map_err(|e| e.to_string())?;
        self.print_state();
        Ok(())
    }

    fn print_state(&self) {
        let state = self.session.snapshot();
        if let Some(analysis) = &state.analysis {
            food_cmd::print_analysis(analysis);
        }
        if let Some(error) = &state.error {
            println!("{} {}", "⚠".yellow(), error.red());
            println!("{}", "Type 'dismiss' to hide this message.".dimmed());
        }
    }

    fn print_slots(&self) {
        let show = |index: usize| match self.slots.get(index) {
            Some(value) if !value.trim().is_empty() => value.cyan().to_string(),
            _ => "-".dimmed().to_string(),
        };
        println!(
            "{:?}: [A] {}  [B] {}  [C] {}",
            self.slots.kind(),
            show(0),
            show(1),
            show(2)
        );
    }

    fn print_message(&self, role: Role, text: &str) {
        match role {
            Role::User => println!("{} {}", "👤".bold(), text),
            Role::Model => println!("{} {}", "🤖".bold(), text.green()),
        }
    }

    async fn send_chat(&mut self, message: &str) -> Result<(), String> {
        let bar = spinner("Thinking...");
        let result = self.chat.send(message).await;
        bar.finish_and_clear();

        let reply = result.map_err(|e| e.to_string())?;
        let (role, text) = (reply.role, reply.text.clone());
        self.print_message(role, &text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockProvider;
    use crate::providers::traits::GenerationProvider;
    use std::sync::Arc;

    fn handler(provider: Arc<MockProvider>) -> CommandHandler {
        let provider: Arc<dyn GenerationProvider> = provider;
        CommandHandler::new(SynergyAnalyzer::new(provider.clone()), ChatClient::new(provider))
    }

    #[tokio::test]
    async fn rejected_analyze_leaves_slots_untouched() {
        let provider = Arc::new(MockProvider::default());
        let mut handler = handler(provider.clone());
        let before = handler.slots.clone();

        let err = handler
            .handle_command("analyze Zinc, Quercetin, Kale, Avocado")
            .await
            .unwrap_err();

        assert_eq!(err, "At most three ingredients can be combined.");
        assert_eq!(handler.slots, before);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn analyze_with_one_ingredient_is_rejected_before_the_service() {
        let provider = Arc::new(MockProvider::default());
        let mut handler = handler(provider.clone());

        let err = handler.handle_command("analyze Turmeric").await.unwrap_err();

        assert_eq!(err, "Please input at least two ingredients.");
        assert_eq!(handler.slots.get(0), Some("Turmeric"));
        assert_eq!(provider.calls(), 0);
    }
}

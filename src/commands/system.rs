use colored::Colorize;

pub fn handle_command(input: &str) -> Result<(), String> {
    match input.to_lowercase().as_str() {
        "help" => {
            println!("\n{}", "🔎 Browse Commands:".bold());
            println!("  goals                 - List goal chips");
            println!("  list [goal]           - Top synergies, optionally for one goal");
            println!("  search <text>         - Search names, ingredients and descriptions");
            println!("  db [filter] [text]    - Database view (All, Cognitive, Physical, Kinetic, Dynamic)");
            println!("  show <rank>           - Detail view with a live analysis");
            println!();

            println!("{}", "🧪 Analyzer Commands:".bold());
            println!("  analyze <a>, <b>[, <c>] - Analyze two or three ingredients");
            println!("  pick <food>             - Put a food in the next free slot");
            println!("  slots                   - Show the current slots");
            println!("  run                     - Analyze the current slots");
            println!("  result                  - Show the last analysis");
            println!("  dismiss                 - Hide the last analysis error");
            println!("  samples                 - Suggested ingredients");
            println!();

            println!("{}", "💬 Chat:".bold());
            println!("  chat <message>   - Ask the assistant");
            println!("  history          - Show the conversation");
            println!("  Anything else you type is sent to the assistant too.");
            println!();

            println!("{}", "⚙️ System Commands:".bold());
            println!("  help  - Show this help menu");
            println!("  exit  - Exit the program");
            Ok(())
        }
        "exit" | "quit" => {
            println!("👋 Goodbye!");
            std::process::exit(0);
        }
        _ => Err("Unknown system command. Type 'help' for available commands.".to_string()),
    }
}

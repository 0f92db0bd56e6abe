use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use language_detector::{DatasetStore, LanguageDetector};

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Config {
    dataset_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: "Dataset.csv".to_string(),
        }
    }
}

fn load_config(path: &str) -> Config {
    if Path::new(path).exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    println!("✓ Loaded configuration from {}", path);
                    return config;
                }
                Err(e) => {
                    eprintln!("⚠ Error parsing config.json: {}", e);
                    eprintln!("  Using default configuration");
                }
            },
            Err(e) => {
                eprintln!("⚠ Error reading config.json: {}", e);
                eprintln!("  Using default configuration");
            }
        }
    } else {
        println!("ℹ config.json not found, using default configuration");
    }

    Config::default()
}

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let mut rl = DefaultEditor::new().unwrap();

    let config = load_config("config.json");
    println!("\nCurrent Configuration:");
    println!("  Dataset Path: {}", config.dataset_path);

    let store = DatasetStore::new(&config.dataset_path);
    let mut detector = match LanguageDetector::from_store(store) {
        Ok(detector) => detector,
        Err(e) => {
            eprintln!("⚠ Error loading dataset: {}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Languages loaded: {}", detector.language_names().join(", "));
    println!("\nLanguage Detection System");
    println!("------------------------");
    println!("Enter a sentence to detect its language.");
    println!("Type 'help' for commands or 'exit' to quit.\n");

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    println!("Please enter a valid sentence.");
                    continue;
                }

                match line {
                    "help" => {
                        println!("The valid commands are->");
                        println!("languages: Lists the languages known to the detector");
                        println!("exit: Quits the program");
                        println!("Any other input is treated as a sentence to detect");
                    }
                    "languages" => {
                        for language in detector.language_names() {
                            println!("{}", language);
                        }
                    }
                    "quit" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    sentence => {
                        run_detection(&mut rl, &mut detector, sentence);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}

fn run_detection(rl: &mut DefaultEditor, detector: &mut LanguageDetector, sentence: &str) {
    let detection = detector.detect(sentence);

    println!("\n{}", detector.predict(&detection.score_board));

    println!("\nMatch statistics:");
    for score in &detection.score_board.scores {
        println!("{}: {} matches", score.language, score.matches);
    }

    if detection.unmatched_words.is_empty() {
        println!();
        return;
    }

    println!(
        "\nUnmatched words: {}",
        detection.unmatched_words.join(", ")
    );
    let answer = rl.readline("Would you like to add these words to the dataset? (y/n): ");
    if let Ok(answer) = answer {
        if answer.trim().eq_ignore_ascii_case("y") {
            classify_words(rl, detector, &detection.unmatched_words);
        }
    }
    println!();
}

fn classify_words(rl: &mut DefaultEditor, detector: &mut LanguageDetector, words: &[String]) {
    let language_names = detector.language_names();

    for word in words {
        println!("\nWord: {}", word);
        println!("Select language:");
        for (index, language) in language_names.iter().enumerate() {
            println!("{}. {}", index + 1, language);
        }

        loop {
            let line = match rl.readline("Enter language number: ") {
                Ok(line) => line,
                Err(_) => return,
            };

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=language_names.len()).contains(&choice) => {
                    if let Err(e) = detector.classify_unmatched(word, choice - 1) {
                        eprintln!("⚠ Error adding word to dataset: {}", e);
                    }
                    break;
                }
                Ok(_) => println!("Invalid choice. Please try again."),
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }
}

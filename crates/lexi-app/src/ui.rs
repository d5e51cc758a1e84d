use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::{AppEvent, QuizQuestion};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Minimal console presentation layer: turns stdin lines into core
/// events and renders whatever the core sends back.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    println!("lexi - type `help` for commands");

    // Needed to map `answer <n>` onto the option list last shown.
    let mut last_question: Option<QuizQuestion> = None;

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                render(event?, &mut last_question);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(());
                };
                match parse_command(&line, last_question.as_ref()) {
                    Ok(Some(event)) => ui_to_app_tx.send(event).await?,
                    Ok(None) => {}
                    Err(Quit) => return Ok(()),
                }
            }
        }
    }
}

struct Quit;

fn parse_command(line: &str, last_question: Option<&QuizQuestion>) -> Result<Option<AppEvent>, Quit> {
    let line = line.trim();
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command {
        "" => None,
        "quit" | "exit" => return Err(Quit),
        "help" => {
            println!(
                "commands: random | search <word> | translate [lang] | save | \
                 delete <id> | quiz | answer <n> | next | quit"
            );
            None
        }
        "random" => Some(AppEvent::RequestRandomWord),
        "search" => Some(AppEvent::SearchWord(rest.to_string())),
        "translate" => Some(AppEvent::TranslateCurrent {
            target_lang: rest.to_string(),
        }),
        "save" => Some(AppEvent::SaveCurrentWord),
        "delete" => match rest.parse() {
            Ok(id) => Some(AppEvent::DeleteEntry { id }),
            Err(_) => {
                println!("usage: delete <id>");
                None
            }
        },
        "quiz" => Some(AppEvent::StartQuiz),
        "answer" => {
            let option = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| last_question.and_then(|q| q.options.get(i)));
            match option {
                Some(option) => Some(AppEvent::SubmitAnswer(option.clone())),
                None => {
                    println!("usage: answer <option number>");
                    None
                }
            }
        }
        "next" => Some(AppEvent::NextQuestion),
        other => {
            println!("unknown command: {other}");
            None
        }
    };

    Ok(event)
}

fn render(event: AppEvent, last_question: &mut Option<QuizQuestion>) {
    match event {
        AppEvent::ShowWord(record) => {
            println!("\n{} {}", record.word, record.phonetic);
            println!("  {}", record.definition);
            for example in &record.examples {
                println!("  e.g. {example}");
            }
        }
        AppEvent::ShowTranslation { word, text } => {
            println!("{word} -> {text}");
        }
        AppEvent::VocabularyUpdated(entries) => {
            println!("vocabulary ({} words):", entries.len());
            for entry in &entries {
                println!("  [{}] {} - {}", entry.id, entry.word, entry.translation);
            }
        }
        AppEvent::ShowQuestion { index, total, question } => {
            println!("\nquestion {}/{}: {}", index + 1, total, question.prompt);
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
            *last_question = Some(question);
        }
        AppEvent::AnswerResult { is_correct, correct_answer, score } => {
            if is_correct {
                println!("correct! score: {score}");
            } else {
                println!("wrong, it was \"{correct_answer}\". score: {score}");
            }
        }
        AppEvent::QuizFinished { score, total } => {
            println!("\nquiz finished: {score}/{total}");
            *last_question = None;
        }
        AppEvent::StatusUpdate { message } => {
            println!("{message}");
        }
        other => {
            tracing::debug!("unrenderable event: {:?}", std::mem::discriminant(&other));
        }
    }
}

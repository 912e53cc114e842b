use std::{cell::RefCell, collections::HashMap, process::exit, rc::Rc, time::Duration};

use cuescript::{
    action::{Input, Wait},
    stage::{Actor, ActorHandle, BubbleSpawner, Position},
    *,
};

const SCRIPT: &str = "\
Fox: Do you have something to tell me?
!Fox: Wave
?Fox
I like you
 Fox: I've heard that before.
I love you
 !Fox: Blush
 Fox: I've never heard that before!
 [True] -> Smitten
END
";

/// Frame time of a 60 Hz game loop.
const FRAME: Duration = Duration::from_micros(16_667);

struct Puppet {
    name: String,
    position: Position,
    animations: Vec<String>,
    parameters: RefCell<HashMap<String, bool>>,
}

impl Actor for Puppet {
    fn has_animation(&self, animation: &str) -> bool {
        self.animations.iter().any(|name| name == animation)
    }

    fn has_bool_parameter(&self, parameter: &str) -> bool {
        self.parameters.borrow().contains_key(parameter)
    }

    fn play(&self, animation: &str) -> BoxedAction {
        println!("  * {} plays '{}'", self.name, animation);
        Box::new(Wait::new(Duration::from_millis(500)))
    }

    fn set_bool(&self, parameter: &str, value: bool) {
        self.parameters
            .borrow_mut()
            .insert(parameter.to_string(), value);
    }

    fn position(&self) -> Position {
        self.position
    }
}

fn main() {
    let fox: ActorHandle = Rc::new(Puppet {
        name: "Fox".to_string(),
        position: Position::new(3.0, 0.0),
        animations: vec!["Wave".to_string(), "Blush".to_string()],
        parameters: RefCell::new(vec![("Talking".to_string(), false)].into_iter().collect()),
    });

    let mut actors = HashMap::new();
    actors.insert("Fox".to_string(), fox);

    let context = DialogueContext::new().with_variable("Smitten", false);

    let settings = Settings::default();
    let transcript = TranscriptBubbles::new(&settings);
    let bubbles: Rc<dyn BubbleSpawner> = Rc::new(transcript.clone());

    let dialogue = Dialogue::new(SCRIPT, Rc::new(actors), Rc::new(context.clone()), bubbles)
        .with_settings(settings);

    if let Err(err) = dialogue.validate() {
        eprint!("{}", error::print_parse_error(&err).unwrap_or_default());
        exit(1);
    }

    let mut scheduler = Scheduler::new();

    if let Err(err) = dialogue.trigger(&mut scheduler) {
        eprintln!("error: {}", err);
        exit(1);
    }

    // The player presses a button every second, picking the second choice
    let mut elapsed = Duration::default();
    let mut presses = 0;
    let mut shown = 0;

    while !scheduler.is_idle() {
        elapsed += FRAME;

        let mut input = Input::default();

        if elapsed >= Duration::from_secs(1) {
            elapsed = Duration::default();
            presses += 1;

            if presses == 2 {
                input.next = true;
            } else {
                input.submit = true;
            }
        }

        if let Err(err) = scheduler.tick(&Frame::new(FRAME).with_input(input)) {
            eprintln!("error: {}", err);
            exit(1);
        }

        for entry in transcript.entries().iter().skip(shown) {
            print_entry(entry);
            shown += 1;
        }
    }

    println!("");
    println!("Smitten: {}", context.get("Smitten").unwrap_or(false));
}

fn print_entry(entry: &TranscriptEntry) {
    match entry {
        TranscriptEntry::Line { text, position } => {
            println!("[{:.1}, {:.1}] {}", position.x, position.y, text)
        }
        TranscriptEntry::Choice {
            labels, selected, ..
        } => {
            for (i, label) in labels.iter().enumerate() {
                let marker = if i == *selected { '>' } else { ' ' };
                println!("  {} {}", marker, label);
            }
        }
    }
}

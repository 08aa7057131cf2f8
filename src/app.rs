use crate::control::engine::GameEngine;
use crate::listener::{EventPrinter, EventWriter, Listener};
use crate::{error, info};
use crate::model::*;
use crate::strategy::create_strategy;
use crate::util::common::{next_value, unixtime_now};

// [App]
// match simulation runner
#[derive(Debug)]
pub struct EngineApp {
    seed: u64,
    rule: Rule,
    write: bool,
    quiet: bool,
    names: [String; SEAT], // strategy names
}

impl EngineApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            rule: Rule::default(),
            write: false,
            quiet: false,
            names: [
                "Standard".into(),
                "Standard".into(),
                "Standard".into(),
                "Standard".into(),
            ],
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, s),
                "-r-rounds" => app.rule.rounds = next_value(&mut it, s),
                "-r-turns" => app.rule.max_turns = next_value(&mut it, s),
                "-r-bonus" => app.rule.special_bonus = next_value(&mut it, s),
                "-r-kong" => app.rule.auto_kong = next_value(&mut it, s),
                "-r-strict" => app.rule.strict_win = next_value(&mut it, s),
                "-w" => app.write = true,
                "-q" => app.quiet = true,
                "-0" => app.names[0] = next_value(&mut it, s),
                "-1" => app.names[1] = next_value(&mut it, s),
                "-2" => app.names[2] = next_value(&mut it, s),
                "-3" => app.names[3] = next_value(&mut it, s),
                opt => {
                    error!("unknown option: {}", opt);
                    std::process::exit(0);
                }
            }
        }

        if app.seed == 0 {
            app.seed = unixtime_now() as u64;
            info!(
                "Random seed is not specified. Unix timestamp '{}' is used as seed.",
                app.seed
            );
        }

        app
    }

    pub fn run(self) {
        println!("seed: {}", self.seed);

        let strategies = [
            create_strategy(&self.names[0]),
            create_strategy(&self.names[1]),
            create_strategy(&self.names[2]),
            create_strategy(&self.names[3]),
        ];
        for s in 0..SEAT {
            println!("strategy{}: {:?}", s, &strategies[s]);
        }
        println!();

        let mut listeners: Vec<Box<dyn Listener>> = vec![];
        if !self.quiet {
            listeners.push(Box::new(EventPrinter::new()));
        }
        if self.write {
            listeners.push(Box::new(EventWriter::new()));
        }

        let mut engine = GameEngine::new(self.seed, self.rule.clone(), strategies, listeners);
        engine.run();
    }
}

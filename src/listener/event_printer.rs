use super::Listener;
use crate::model::*;
use crate::util::common::vec_to_string;

// [EventPrinter]
// renders engine events as text; the core never formats output itself
#[derive(Debug)]
pub struct EventPrinter {}

impl EventPrinter {
    pub fn new() -> Self {
        Self {}
    }

    fn print_scores(&self, scores: &[Point; SEAT]) {
        for s in 0..SEAT {
            println!("player {}: {} points", s, scores[s]);
        }
        println!();
    }
}

impl Listener for EventPrinter {
    fn notify_event(&mut self, stg: &Stage, event: &Event) {
        use Event::*;
        print!("(step:{}) ", stg.step);
        match event {
            Begin(e) => {
                println!("Begin");
                for s in 0..SEAT {
                    println!("seat {}: {}", s, e.names[s]);
                }
                println!();
            }
            New(e) => {
                println!("New round {} (dealer: {})", e.round, e.dealer);
                println!("{}", stg);
            }
            Deal(e) => {
                println!(
                    "Deal {} -> seat {}{}",
                    e.tile.name(),
                    e.seat,
                    if e.is_replacement { " (replacement)" } else { "" },
                );
            }
            Bonus(e) => {
                println!("Bonus {} set aside by seat {}", e.tile.name(), e.seat);
            }
            Meld(e) => {
                println!(
                    "{:?} {} exposed by seat {}",
                    e.group_type,
                    vec_to_string(&e.tiles),
                    e.seat,
                );
            }
            Discard(e) => {
                println!(
                    "Discard {} by seat {}{}",
                    e.tile.name(),
                    e.seat,
                    if e.is_drawn { " (drawn)" } else { "" },
                );
            }
            Win(e) => {
                println!(
                    "Win! seat {} completed with {} for {} points",
                    e.seat,
                    e.winning_tile.name(),
                    e.points,
                );
                println!("{}", stg.players[e.seat]);
                self.print_scores(&e.scores);
            }
            Draw(e) => {
                println!("Round drawn ({:?})", e.draw_type);
                self.print_scores(&e.scores);
            }
            End(e) => {
                println!("End of match");
                for s in 0..SEAT {
                    println!(
                        "player {}: {} points, {} round wins",
                        s, e.scores[s], e.wins[s],
                    );
                }
                println!(
                    "player {} wins the match with {} points!",
                    e.winner, e.scores[e.winner],
                );
            }
        }
    }
}

mod commands;
mod terminal;

use commands::{CommandLine, Commands, car, circle, counter, heap, person, sort, stack, style, user};
use primer_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        seed: commands.seed,
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging();
    print::initialize(&cfg);

    let result: anyhow::Result<()> = match commands.command {
        Commands::Circle { radius } => {
            print::header("circle");
            circle::circle(radius)
        }
        Commands::Person {
            first,
            last,
            born,
            today,
        } => {
            print::header("person");
            person::person(first, last, born, today, &cfg)
        }
        Commands::User {
            email,
            name,
            password,
            age,
            height,
        } => {
            print::header("user");
            user::user(email, name, password, age, height)
        }
        Commands::Car { brand, model } => {
            print::header("car");
            car::car(brand, model)
        }
        Commands::Counter { ops } => {
            print::header("counter");
            counter::counter(&ops)
        }
        Commands::Style { label, exact } => {
            print::header("text style");
            style::style(&label, exact)
        }
        Commands::Stack { items, capacity } => {
            print::header("bounded stack");
            stack::stack(items, capacity)
        }
        Commands::Heap { values, max_size } => {
            print::header("max heap");
            heap::heap(values, max_size)
        }
        Commands::Sort { values, merge } => {
            print::header("sort");
            sort::sort(values, merge)
        }
    };

    print::end_of_program();
    result
}

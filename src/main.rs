use log::{error, info, warn, LevelFilter};
use simplelog::{Config, SimpleLogger};
use splay_set::SplaySet;
use std::env;
use std::io::{self, BufRead};

enum Command {
    Insert(i64),
    Remove(i64),
    Get(i64),
    Min,
    Max,
    Len,
    Print,
    Clear,
    Quit,
}

fn parse_key(arg: Option<&str>) -> Result<i64, String> {
    let arg = arg.ok_or_else(|| String::from("missing key"))?;
    arg.parse()
        .map_err(|err| format!("invalid key `{}`: {}", arg, err))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut args = line.split_whitespace();
    let command = match args.next() {
        Some("insert") => Command::Insert(parse_key(args.next())?),
        Some("remove") => Command::Remove(parse_key(args.next())?),
        Some("get") => Command::Get(parse_key(args.next())?),
        Some("min") => Command::Min,
        Some("max") => Command::Max,
        Some("len") => Command::Len,
        Some("print") => Command::Print,
        Some("clear") => Command::Clear,
        Some("quit") => Command::Quit,
        Some(other) => return Err(format!("unknown command `{}`", other)),
        None => return Err(String::from("empty line")),
    };
    match args.next() {
        Some(extra) => Err(format!("unexpected argument `{}`", extra)),
        None => Ok(command),
    }
}

fn print(set: &SplaySet<i64>) {
    let keys: Vec<String> = set.iter().map(|key| key.to_string()).collect();
    println!("{}", keys.join(" "));
}

fn run_example() {
    let mut set: SplaySet<i64> = vec![1, 0, 2, 4, 3].into_iter().collect();
    info!("min = {:?}", set.min());
    info!("max = {:?}", set.max());
    info!("contains 2 = {}", set.contains(&2));
    info!("insert 5 = {}", set.insert(5));
    info!("remove 1 = {}", set.remove(&1));
    print(&set);
}

fn main() {
    let requested = env::args().nth(1);
    let level = requested
        .as_ref()
        .and_then(|arg| arg.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    if let Err(err) = SimpleLogger::init(level, Config::default()) {
        eprintln!("failed to install logger: {}", err);
    }
    if let Some(arg) = requested {
        if arg.parse::<LevelFilter>().is_err() {
            warn!("unknown log level `{}`, using {}", arg, level);
        }
    }

    run_example();

    let mut set = SplaySet::new();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read input: {}", err);
                break;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Insert(key)) => println!("{}", set.insert(key)),
            Ok(Command::Remove(key)) => println!("{}", set.remove(&key)),
            Ok(Command::Get(key)) => println!("{:?}", set.get(&key)),
            Ok(Command::Min) => println!("{:?}", set.min()),
            Ok(Command::Max) => println!("{:?}", set.max()),
            Ok(Command::Len) => println!("{}", set.len()),
            Ok(Command::Print) => print(&set),
            Ok(Command::Clear) => set.clear(),
            Ok(Command::Quit) => break,
            Err(err) => warn!("{}", err),
        }
        info!("root = {:?}, len = {}", set.root(), set.len());
    }
}

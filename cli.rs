use std::io::{BufWriter, Write};

use hanoi::{move_count, Moves, Peg};

fn read_n() -> Result<u32, String> {
    // Disk count from the first argument if given, otherwise from stdin.
    let line = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            eprint!("number of disks: ");
            let mut buf = String::new();
            std::io::stdin()
                .read_line(&mut buf)
                .map_err(|e| format!("reading stdin: {}", e))?;
            buf
        }
    };
    line.trim()
        .parse::<u32>()
        .map_err(|_| format!("not a non-negative integer: {:?}", line.trim()))
}

fn main() {
    let n = match read_n() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("hanoi: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    let res = Moves::new(n, Peg::A, Peg::C, Peg::B)
        .try_for_each(|mv| writeln!(stdout, "{}", mv))
        .and_then(|_| stdout.flush());
    if let Err(e) = res {
        // A closed pipe (`hanoi 20 | head`) is not a crash.
        eprintln!("hanoi: {}", e);
        std::process::exit(1);
    }

    eprintln!("{} disks, {} moves", n, move_count(n));
}

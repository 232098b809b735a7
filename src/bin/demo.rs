use std::fmt::Display;
use std::process::ExitCode;
use std::sync::Arc;

use sort_kit::record::Student;
use sort_kit::transform::{filter_into, map_into};
use sort_kit::workers::{self, StdoutSink, WorkerConfig};
use sort_kit::{filter, map, sort, sort_by_less};

fn format_list<T: Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("[{joined}]")
}

fn main() -> ExitCode {
    let mut names = vec![
        String::from("Michael"),
        String::from("Jennifer"),
        String::from("Elaine"),
    ];
    sort(&mut names);
    println!("{}", format_list(&names));

    let mut ints = vec![78, 64, 45];
    sort(&mut ints);
    println!("{}", format_list(&ints));

    let mut students = vec![
        Student::new("John", 213, 17.5),
        Student::new("James", 111, 18.75),
        Student::new("Marsha", 110, 16.25),
    ];
    sort_by_less(&mut students, Student::younger);
    println!("{}", format_list(&students));

    let slice = [1, 5, 2, 7, 4];
    println!("{}", format_list(&map(&slice, |i| i * i)));
    println!("{}", format_list(&map_into(slice, |i: i32| i.pow(2))));

    let input = [17.3, 11.1, 9.9, 4.3, 12.6];
    println!("{}", format_list(&filter(&input, |&num| num <= 10.0)));
    println!("{}", format_list(&filter_into(input, |num| *num <= 10.0)));
    println!("{}", format_list(&map(&input, |n| n * n)));

    match workers::run(&WorkerConfig::default(), Arc::new(StdoutSink)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Demo workers failed: {err}");
            ExitCode::FAILURE
        }
    }
}

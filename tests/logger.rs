use std::env;
use std::fs;

use linthresh::prelude::*;
use linthresh::research::{Logger, zero_one_loss, squared_loss};


fn toy_sample() -> Sample {
    let x = vec![
        vec![-2.0, -1.0],
        vec![-1.0, -1.5],
        vec![-1.5,  0.5],
        vec![ 1.0,  1.5],
        vec![ 2.0,  0.5],
        vec![ 1.5,  2.0],
    ];
    let y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    Sample::from_rows(x, y).unwrap()
}


/// Tests for `Logger`.
#[cfg(test)]
pub mod logger_tests {
    use super::*;

    #[test]
    fn writes_one_line_per_epoch() {
        let sample = toy_sample();
        let mut path = env::temp_dir();
        path.push("linthresh_perceptron_log.csv");

        let perceptron = Perceptron::new(0.1, 7, 1).unwrap();
        let perceptron = Logger::new(perceptron, zero_one_loss, &sample, &sample)
            .print_every(1)
            .run(&path)
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines = contents.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Epoch,History,TrainLoss,TestLoss,Time");
        assert_eq!(lines.len(), 1 + 7);

        let errors = perceptron.errors().unwrap();
        for (epoch, line) in lines[1..].iter().enumerate() {
            let cols = line.split(',').collect::<Vec<_>>();
            assert_eq!(cols[0], (epoch + 1).to_string());
            assert_eq!(cols[1], errors[epoch].to_string());
        }

        fs::remove_file(&path).unwrap();
    }


    #[test]
    fn same_result_as_fit() {
        let sample = toy_sample();
        let mut path = env::temp_dir();
        path.push("linthresh_adaline_log.csv");

        let adaline = AdalineGD::new(0.05, 30, 3).unwrap();
        let logged = Logger::new(adaline.clone(), squared_loss, &sample, &sample)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();

        let mut fitted = adaline;
        fitted.fit(&sample).unwrap();

        assert_eq!(logged.state(), fitted.state());
        fs::remove_file(&path).unwrap();
    }


    #[test]
    fn print_every_zero_is_silent() {
        let sample = toy_sample();
        let mut path = env::temp_dir();
        path.push("linthresh_silent_log.csv");

        let perceptron = Perceptron::new(0.1, 12, 1).unwrap();
        let perceptron = Logger::new(perceptron, zero_one_loss, &sample, &sample)
            .print_every(0)
            .run(&path)
            .unwrap();
        assert_eq!(perceptron.errors().unwrap().len(), 12);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1 + 12);
        fs::remove_file(&path).unwrap();
    }
}

use linthresh::prelude::*;


use polars::prelude::*;


/// Tests for `Sample`.
#[cfg(test)]
pub mod sample_tests {
    use super::*;

    #[test]
    fn from_rows() {
        let x = vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ];
        let y = vec![0.0, 1.0];
        let sample = Sample::from_rows(x, y).unwrap();

        assert_eq!(sample.shape(), (2, 3));
        assert_eq!(sample.at(1), (&[4.0, 5.0, 6.0][..], 1.0));
        assert_eq!(sample.feature_names(), ["Feat. [1]", "Feat. [2]", "Feat. [3]"]);
        assert!(sample.is_valid_binary_instance().is_ok());
    }


    #[test]
    fn row_count_mismatch() {
        let x = vec![vec![1.0], vec![2.0], vec![3.0]];
        let y = vec![0.0, 1.0];
        match Sample::from_rows(x, y) {
            Err(Error::DimensionMismatch { expected, found, .. }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }


    #[test]
    fn ragged_rows() {
        let x = vec![vec![1.0, 2.0], vec![3.0]];
        let y = vec![0.0, 1.0];
        assert!(matches!(
            Sample::from_rows(x, y),
            Err(Error::DimensionMismatch { .. })
        ));
    }


    #[test]
    fn empty_sample_cannot_be_fitted() {
        let sample = Sample::from_rows(Vec::new(), Vec::new()).unwrap();
        assert_eq!(sample.shape(), (0, 0));

        let mut clf = Perceptron::default();
        assert!(matches!(clf.fit(&sample), Err(Error::InvalidData(_))));
    }


    #[test]
    fn from_dataframe() {
        let s1 = Series::new("sepal", &[5.1, 4.9, 7.0, 6.4]);
        let s2 = Series::new("petal", &[1_i64, 1, 5, 4]);
        let target = Series::new("class", &[0_i64, 0, 1, 1]);

        let df = DataFrame::new(vec![s1, s2]).unwrap();
        let sample = Sample::from_dataframe(df, target).unwrap();

        assert_eq!(sample.shape(), (4, 2));
        assert_eq!(sample.feature_names(), ["sepal", "petal"]);
        assert_eq!(sample.rows()[2], vec![7.0, 5.0]);
        assert_eq!(sample.target(), [0.0, 0.0, 1.0, 1.0]);

        let mut clf = Perceptron::new(0.1, 10, 1).unwrap();
        clf.fit(&sample).unwrap();
        assert_eq!(clf.predict_all(&sample).unwrap(), vec![0, 0, 1, 1]);
    }


    #[test]
    fn from_dataframe_with_null() {
        let s1 = Series::new("x", &[Some(1.0), None, Some(3.0)]);
        let target = Series::new("class", &[0.0, 1.0, 1.0]);

        let df = DataFrame::new(vec![s1]).unwrap();
        assert!(matches!(
            Sample::from_dataframe(df, target),
            Err(Error::InvalidData(_))
        ));
    }


    #[test]
    fn replace_names() {
        let x = vec![vec![1.0, 2.0]];
        let y = vec![1.0];
        let mut sample = Sample::from_rows(x, y).unwrap();

        let old = sample.replace_names(["a", "b"]).unwrap();
        assert_eq!(old, ["Feat. [1]", "Feat. [2]"]);
        assert_eq!(sample.feature_names(), ["a", "b"]);
        assert!(sample.replace_names(["a"]).is_err());
    }


    #[test]
    fn config_from_json() {
        let config = LearnerConfig::from_json(
            r#"{ "eta": 0.1, "n_iter": 20, "random_state": 1 }"#
        ).unwrap();
        let clf = Perceptron::from_config(config).unwrap();
        assert_eq!(clf.config(), &LearnerConfig::new(0.1, 20, 1).unwrap());

        let config = LearnerConfig::from_json("{}").unwrap();
        assert_eq!(config, LearnerConfig::default());

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(LearnerConfig::from_json(json).unwrap(), config);

        assert!(matches!(
            LearnerConfig::from_json(r#"{ "n_iter": 0 }"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LearnerConfig::from_json("not json"),
            Err(Error::Json(_))
        ));
    }


    #[test]
    fn from_dataframe_with_string_column() {
        let s1 = Series::new("x", &[1.0, 2.0, 3.0]);
        let s2 = Series::new("species", &["setosa", "setosa", "versicolor"]);
        let target = Series::new("class", &[0.0, 0.0, 1.0]);

        let df = DataFrame::new(vec![s1, s2]).unwrap();
        match Sample::from_dataframe(df, target) {
            Err(Error::InvalidData(message)) => {
                assert!(message.contains("species"));
                assert!(message.contains("not numeric"));
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }


    #[test]
    fn perceptron_json_configuration() {
        let clf = Perceptron::from_json(r#"{ "eta": 0.1 }"#).unwrap();
        assert_eq!(clf.config(), &LearnerConfig::new(0.1, 20, 1).unwrap());

        let config = LearnerConfig::from_json_with(
            r#"{ "random_state": 9 }"#,
            LearnerConfig::default().n_iter(50),
        ).unwrap();
        assert_eq!(config, LearnerConfig::new(0.01, 50, 9).unwrap());
    }


    #[test]
    fn negative_seed_is_rejected() {
        assert!(matches!(
            LearnerConfig::from_json(r#"{ "random_state": -1 }"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Perceptron::from_json(r#"{ "random_state": -1 }"#),
            Err(Error::Json(_))
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use clap::Parser;

    use crate::app::{run, CliArgs, Command};
    use crate::core::interfaces::adapters::{AnnotationClient, AnnotationClientProvider};
    use crate::core::interfaces::ports::ImageLoader;
    use crate::core::models::{
        AnnotationRequest, AnnotationResult, BoundingPoly, DetectSettings, ImageSource,
        TextAnnotation,
    };
    use crate::core::orchestrators::DetectOrchestrator;
    use crate::global_constants;

    struct MockImageLoader;

    impl ImageLoader for MockImageLoader {
        fn load(&self, path: &str) -> Result<ImageSource> {
            Ok(ImageSource::Content(path.as_bytes().to_vec()))
        }
    }

    struct MockClient {
        response: AnnotationResult,
    }

    impl AnnotationClient for MockClient {
        fn annotate(&self, _request: &AnnotationRequest) -> Result<AnnotationResult> {
            Ok(self.response.clone())
        }
    }

    struct MockClientProvider {
        response: AnnotationResult,
    }

    impl AnnotationClientProvider for MockClientProvider {
        fn connect(&self) -> Result<Box<dyn AnnotationClient>> {
            Ok(Box::new(MockClient {
                response: self.response.clone(),
            }))
        }
    }

    fn cli(args: &[&str]) -> CliArgs {
        let mut argv = vec![global_constants::APPLICATION_NAME];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    fn mock_orchestrator(texts: &[&str]) -> DetectOrchestrator {
        let response = AnnotationResult::Annotations(
            texts
                .iter()
                .map(|text| TextAnnotation::new(*text, BoundingPoly::from_points(&[(1, 1)])))
                .collect(),
        );
        let provider = MockClientProvider { response };
        DetectOrchestrator::build(
            Arc::new(MockImageLoader),
            Arc::new(provider),
            &DetectSettings::default(),
        )
        .unwrap()
    }

    fn refuse_to_build() -> Result<DetectOrchestrator> {
        anyhow::bail!("orchestrator should not be needed")
    }

    fn run_capturing<F>(args: &[&str], build: F) -> (Result<()>, String, String)
    where
        F: FnOnce() -> Result<DetectOrchestrator>,
    {
        let mut out = Vec::<u8>::new();
        let mut err = Vec::<u8>::new();
        let result = run(cli(args), &mut out, &mut err, build);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_no_arguments_prints_usage_only() {
        let (result, out, err) = run_capturing(&[], refuse_to_build);

        assert!(result.is_ok());
        assert_eq!(out, global_constants::USAGE_TEXT);
        assert!(err.is_empty());
    }

    #[test]
    fn test_usage_lists_advertised_commands() {
        for command in global_constants::ADVERTISED_ONLY_COMMANDS {
            assert!(
                global_constants::USAGE_TEXT.contains(command),
                "usage is missing {}",
                command
            );
        }
        assert!(global_constants::USAGE_TEXT.contains("text"));
        assert!(global_constants::USAGE_TEXT.contains("gs://"));
    }

    #[test]
    fn test_command_parse_recognizes_functional_commands() {
        assert_eq!(Command::parse("text"), Command::Text);
        assert_eq!(Command::parse("isbn"), Command::Isbn);
        assert_eq!(Command::parse("lotto"), Command::Lotto);
    }

    #[test]
    fn test_command_parse_separates_advertised_from_unknown() {
        assert_eq!(
            Command::parse("faces"),
            Command::Advertised("faces".to_string())
        );
        assert_eq!(
            Command::parse("safe-search"),
            Command::Advertised("safe-search".to_string())
        );
        assert_eq!(
            Command::parse("TEXT"),
            Command::Unknown("TEXT".to_string())
        );
    }

    #[test]
    fn test_advertised_command_is_silent_no_op() {
        let (result, out, err) = run_capturing(&["labels", "cat.jpg"], refuse_to_build);

        assert!(result.is_ok());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_is_silent_no_op() {
        let (result, out, err) = run_capturing(&["frobnicate", "cat.jpg"], refuse_to_build);

        assert!(result.is_ok());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_hyphen_leading_words_are_silent_no_ops() {
        let samples: &[&[&str]] = &[&["-x", "a.png"], &["--help"], &["-h"], &["-V"], &["--version"]];

        for args in samples {
            let (result, out, err) = run_capturing(args, refuse_to_build);

            assert!(result.is_ok(), "{:?} failed", args);
            assert!(out.is_empty(), "{:?} wrote {:?}", args, out);
            assert!(err.is_empty());
        }
    }

    #[test]
    fn test_hyphen_leading_path_is_passed_through() {
        let parsed = cli(&["isbn", "-cover.png"]);

        assert_eq!(parsed.command.as_deref(), Some("isbn"));
        assert_eq!(parsed.path.as_deref(), Some("-cover.png"));
    }

    #[test]
    fn test_isbn_and_lotto_without_path_are_silent_no_ops() {
        for command in ["isbn", "lotto"] {
            let (result, out, err) = run_capturing(&[command], refuse_to_build);

            assert!(result.is_ok(), "{} without path failed", command);
            assert!(out.is_empty());
            assert!(err.is_empty());
        }
    }

    #[test]
    fn test_text_command_dumps_annotations() {
        let (result, out, _) =
            run_capturing(&["text", "sign.png"], || Ok(mock_orchestrator(&["Hello", "World"])));

        assert!(result.is_ok());
        assert_eq!(
            out,
            "Text: Hello\nPosition : [(1, 1)]\nText: World\nPosition : [(1, 1)]\n"
        );
    }

    #[test]
    fn test_isbn_command_prints_found_value() {
        let (result, out, _) = run_capturing(&["isbn", "book.png"], || {
            Ok(mock_orchestrator(&["ISBN 123", "ISBN", "123"]))
        });

        assert!(result.is_ok());
        assert_eq!(out, "return:123\n");
    }

    #[test]
    fn test_lotto_command_reports_not_found_on_error_stream() {
        let (result, out, err) = run_capturing(&["lotto", "ticket.png"], || {
            Ok(mock_orchestrator(&["12 34 56 78 90 PB 11"]))
        });

        assert!(result.is_ok());
        assert!(out.is_empty());
        assert_eq!(
            err,
            format!(
                "Detect returns:12 34 56 78 90 PB 11\n{}\n",
                global_constants::MESSAGE_LOTTO_NOT_FOUND
            )
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = cli(&["text", "a.png", "b.png", "c.png"]);

        assert_eq!(args.command.as_deref(), Some("text"));
        assert_eq!(args.path.as_deref(), Some("a.png"));
        assert_eq!(args.extra, vec!["b.png".to_string(), "c.png".to_string()]);
    }

    #[test]
    fn test_orchestrator_build_failure_propagates_for_real_commands() {
        let (result, _, _) = run_capturing(&["text", "sign.png"], refuse_to_build);

        assert!(result.is_err());
    }
}

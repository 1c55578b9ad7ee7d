//! Integration tests for weissbench
//!
//! These tests drive the benchmark, export and configuration crates together
//! against real files.

use rstest::rstest;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

use weissbench_compression::{CompressorFactory, CompressorOptions};
use weissbench_config::{ConfigBuilder, ConfigLoader};
use weissbench_engine::{original_size, CompressionBenchmark};
use weissbench_export::{export_to_file, import_from_file, ExportFormat, ExporterFactory};
use weissbench_tests::test_utils::{
    create_test_directory_structure, create_test_file, entry_count, sample_results,
    TestDataPattern,
};
use weissbench_types::{
    AlgorithmSelection, Alpha, BenchmarkObserver, BenchmarkResult, CancelFlag, Cancellable,
    CompressionAlgorithm, Error, FileSize, ScratchConfig,
};

fn options_in(scratch: &TempDir, cancel: CancelFlag) -> CompressorOptions {
    CompressorOptions {
        scratch: ScratchConfig {
            directory: Some(scratch.path().to_path_buf()),
            secure_delete: false,
        },
        cancel,
        ..CompressorOptions::default()
    }
}

/// Raises the cancel flag as soon as the reference run finishes
struct CancelAfterReference(CancelFlag);

impl BenchmarkObserver for CancelAfterReference {
    fn on_result(&self, result: &BenchmarkResult, _reported: bool) {
        if result.algorithm().is_reference() {
            self.0.cancel();
        }
    }
}

/// Records every benchmark event in order
#[derive(Default)]
struct EventLog(Mutex<Vec<String>>);

impl EventLog {
    fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }

    fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl BenchmarkObserver for EventLog {
    fn on_start(&self, _input: &Path, _original_size: FileSize, runs: usize) {
        self.push(format!("start:{}", runs));
    }

    fn on_algorithm_start(&self, algorithm: CompressionAlgorithm) {
        self.push(format!("begin:{}", algorithm));
    }

    fn on_result(&self, result: &BenchmarkResult, reported: bool) {
        self.push(format!("result:{}:{}", result.algorithm(), reported));
    }

    fn on_complete(&self, results: &[BenchmarkResult]) {
        self.push(format!("complete:{}", results.len()));
    }
}

#[test]
fn test_repeated_bytes_compress_with_gzip() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(&temp_dir, "repeated.bin", 10_000, TestDataPattern::Repeated);

    let compressor =
        CompressorFactory::create(CompressionAlgorithm::Gzip, &CompressorOptions::default());
    let outcome = compressor.compress(&input)?;

    assert!(outcome.compressed_size < 10_000);
    assert!(outcome.elapsed_secs() > 0.0);
    Ok(())
}

#[test]
fn test_empty_request_performs_no_runs() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let scratch = TempDir::new()?;
    let input = create_test_file(&temp_dir, "input.txt", 4096, TestDataPattern::Text);

    let events = EventLog::default();

    let results = CompressionBenchmark::new(&input)?
        .with_options(options_in(&scratch, CancelFlag::new()))
        .run_with_observer(&[], &events)?;

    assert!(results.is_empty());
    assert!(events.events().is_empty());
    assert_eq!(entry_count(scratch.path()), 0);
    Ok(())
}

#[test]
fn test_unrequested_reference_runs_first() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(&temp_dir, "input.txt", 4096, TestDataPattern::Text);
    let events = EventLog::default();

    let results = CompressionBenchmark::new(&input)?
        .run_with_observer(&[CompressionAlgorithm::Tar], &events)?;

    assert_eq!(results.len(), 1);
    assert_eq!(
        events.events(),
        vec![
            "start:2",
            "begin:gzip",
            "result:gzip:false",
            "begin:tar",
            "result:tar:true",
            "complete:1",
        ]
    );
    Ok(())
}

#[test]
fn test_reference_scores_one_for_every_selection() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(&temp_dir, "input.txt", 32 * 1024, TestDataPattern::Text);
    let benchmark = CompressionBenchmark::new(&input)?.with_alpha(Alpha::new(2.0)?);

    let results = benchmark.run(AlgorithmSelection::all().algorithms())?;

    assert_eq!(results.len(), CompressionAlgorithm::ALL.len());
    let reference = results
        .iter()
        .find(|r| r.algorithm().is_reference())
        .ok_or("reference missing")?;
    assert_eq!(reference.weissman_score(), 1.0);
    assert!(results.iter().all(|r| r.original_size() == 32 * 1024));
    Ok(())
}

#[test]
fn test_unrequested_reference_is_not_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(&temp_dir, "input.txt", 8192, TestDataPattern::Text);

    let results = CompressionBenchmark::new(&input)?.run(&[CompressionAlgorithm::Zip])?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].algorithm(), CompressionAlgorithm::Zip);
    Ok(())
}

#[test]
fn test_directory_original_size_is_sum_of_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let expected = create_test_directory_structure(temp_dir.path());

    assert_eq!(original_size(temp_dir.path())?, expected);

    let results = CompressionBenchmark::new(temp_dir.path())?
        .run(&[CompressionAlgorithm::Tar, CompressionAlgorithm::Lzma])?;
    assert!(results.iter().all(|r| r.original_size() == expected));
    Ok(())
}

#[rstest]
#[case(CompressionAlgorithm::Gzip)]
#[case(CompressionAlgorithm::Bzip2)]
#[case(CompressionAlgorithm::Lzma)]
#[case(CompressionAlgorithm::Zip)]
#[case(CompressionAlgorithm::Tar)]
fn test_repeated_runs_are_idempotent(#[case] algorithm: CompressionAlgorithm) {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "input.bin", 16 * 1024, TestDataPattern::Random);
    let compressor = CompressorFactory::create(algorithm, &CompressorOptions::default());

    let first = compressor.compress(&input).unwrap();
    let second = compressor.compress(&input).unwrap();

    assert_eq!(first.compressed_size, second.compressed_size);
    assert!(first.elapsed_secs() > 0.0);
    assert!(second.elapsed_secs() > 0.0);
}

#[rstest]
#[case(ExportFormat::Json)]
#[case(ExportFormat::Yaml)]
#[case(ExportFormat::Csv)]
#[case(ExportFormat::Xml)]
fn test_export_round_trip(#[case] format: ExportFormat) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join(format!("results.{}", format.extension()));
    let results = sample_results();

    export_to_file(format, &results, &path).unwrap();
    let loaded = import_from_file(format, &path).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded, results);
    assert_eq!(loaded[1].algorithm(), CompressionAlgorithm::Bzip2);
    assert_eq!(loaded[1].compressed_size(), 4000);
    assert_eq!(loaded[1].compression_time(), 0.7);
}

#[test]
fn test_html_export_is_presentation_only() {
    let exporter = ExporterFactory::create(ExportFormat::Html);
    let rendered = exporter.render(&sample_results()).unwrap();

    assert!(rendered.contains("9.77 KB"));
    let gzip = rendered.find("<td>gzip</td>").unwrap();
    let bzip2 = rendered.find("<td>bzip2</td>").unwrap();
    assert!(gzip < bzip2);
    assert!(exporter.parse(&rendered).is_err());
}

#[test]
fn test_benchmark_results_survive_export() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(&temp_dir, "input.txt", 16 * 1024, TestDataPattern::Text);
    let output = temp_dir.path().join("results.csv");

    let results = CompressionBenchmark::new(&input)?
        .run(&[CompressionAlgorithm::Gzip, CompressionAlgorithm::Tar])?;
    export_to_file(ExportFormat::Csv, &results, &output)?;

    assert_eq!(import_from_file(ExportFormat::Csv, &output)?, results);
    Ok(())
}

#[test]
fn test_scratch_directory_empty_after_success() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let scratch = TempDir::new()?;
    create_test_directory_structure(temp_dir.path());

    let results = CompressionBenchmark::new(temp_dir.path())?
        .with_options(options_in(&scratch, CancelFlag::new()))
        .run(AlgorithmSelection::all().algorithms())?;

    assert_eq!(results.len(), CompressionAlgorithm::ALL.len());
    assert_eq!(entry_count(scratch.path()), 0);
    Ok(())
}

#[test]
fn test_scratch_directory_empty_after_cancel() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let scratch = TempDir::new()?;
    let input = create_test_file(&temp_dir, "input.txt", 64 * 1024, TestDataPattern::Text);
    let cancel = CancelFlag::new();

    let result = CompressionBenchmark::new(&input)?
        .with_options(options_in(&scratch, cancel.clone()))
        .run_with_observer(
            &[CompressionAlgorithm::Lzma, CompressionAlgorithm::Zip],
            &CancelAfterReference(cancel.clone()),
        );

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(cancel.is_cancelled());
    assert_eq!(entry_count(scratch.path()), 0);
    Ok(())
}

#[test]
fn test_missing_input_fails_before_any_run() {
    let scratch = TempDir::new().unwrap();
    let missing = scratch.path().join("missing");

    let result = CompressionBenchmark::new(&missing);

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
    assert_eq!(entry_count(scratch.path()), 0);
}

#[rstest]
#[case("gzip", vec![CompressionAlgorithm::Gzip])]
#[case("bzip2,lzma", vec![CompressionAlgorithm::Bzip2, CompressionAlgorithm::Lzma])]
#[case("ZIP, tar ,zip", vec![CompressionAlgorithm::Zip, CompressionAlgorithm::Tar])]
#[case("all", CompressionAlgorithm::ALL.to_vec())]
fn test_selection_tokens(#[case] token: &str, #[case] expected: Vec<CompressionAlgorithm>) {
    let selection: AlgorithmSelection = token.parse().unwrap();
    assert_eq!(selection.algorithms(), expected.as_slice());
}

#[test]
fn test_format_tokens_round_trip() {
    for format in ExportFormat::ALL {
        assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
    }
    for algorithm in CompressionAlgorithm::ALL {
        assert_eq!(algorithm.to_string().parse::<CompressionAlgorithm>().unwrap(), algorithm);
    }
}

#[test]
fn test_config_file_drives_benchmark() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(&temp_dir, "input.txt", 8192, TestDataPattern::Text);
    let config_path = temp_dir.path().join("weissbench.yaml");
    fs::write(
        &config_path,
        "benchmark:\n  alpha: 2.0\n  algorithms: [gzip, bzip2]\ncodecs:\n  gzip: 1\n",
    )?;

    let config = ConfigBuilder::new()
        .add_defaults()
        .add_source_file(&config_path)
        .add_env_prefix("WEISSBENCH_INTEGRATION_TEST")
        .build()?;
    assert_eq!(config.codecs.gzip.get(), 1);

    let options = CompressorOptions {
        levels: config.codecs,
        ..CompressorOptions::default()
    };
    let results = CompressionBenchmark::new(&input)?
        .with_options(options)
        .with_alpha(config.benchmark.alpha)
        .run(&config.benchmark.algorithms)?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].weissman_score(), 1.0);
    Ok(())
}

#[test]
fn test_config_save_and_reload() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("weissbench.toml");

    ConfigLoader::generate_default_config(&path)?;
    let loaded = ConfigLoader::load_from_file(&path)?;

    assert_eq!(loaded.benchmark.alpha.get(), 1.0);
    assert_eq!(loaded.benchmark.algorithms, CompressionAlgorithm::ALL.to_vec());
    Ok(())
}

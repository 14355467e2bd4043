use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use gqlparse::SyntaxError;
use gqlparse::ast::Definition;
use gqlparse::ast::Document;
use gqlparse::ast::IndexedList;
use gqlparse_validation::ValidationError;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// How each parsed document is validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub(crate) enum ValidationMode {
    /// Documents made only of type system definitions and extensions are
    /// schema documents; all others are executable documents.
    #[default]
    Auto,
    Executable,
    Sdl,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t,
        help="Which rule set to validate documents with.",
        long,
        value_enum,
    )]
    mode: ValidationMode,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

struct SourceFile {
    path: PathBuf,
    source: String,
}

/// Files found under the input paths.
struct FileScan {
    file_paths: Vec<PathBuf>,
    num_non_graphql_files: usize,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        let FileScan { file_paths, num_non_graphql_files } =
            self.scan_files(&mut errors);
        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );

        let sources = read_source_files(file_paths, &mut errors).await;
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to load GraphQL files:\n{}",
                output_utils::RED_X,
                output_utils::bulleted(&errors),
            ));
        }

        // Parsing is independent per file.
        let parsed: Vec<(&SourceFile, Result<Document<'_>, SyntaxError>)> =
            sources.par_iter()
                .map(|file| (file, gqlparse::parse(&file.source)))
                .collect();

        let mut schema_docs = vec![];
        let mut executable_docs = vec![];
        for (file, result) in parsed {
            match result {
                Ok(document) => {
                    if self.is_schema_document(&document) {
                        schema_docs.push((file, document));
                    } else {
                        executable_docs.push((file, document));
                    }
                },

                Err(err) => errors.push(format!(
                    "{}:\n{}",
                    file.path.display(),
                    err.format_detailed(Some(&file.source)),
                )),
            }
        }
        log::debug!(
            "Parsed {} schema documents and {} executable documents.",
            schema_docs.len(),
            executable_docs.len(),
        );

        // Each executable document gets its own walker.
        let executable_errors: Vec<(&Path, Vec<ValidationError>)> =
            executable_docs.par_iter()
                .map(|(file, document)| {
                    (file.path.as_path(), gqlparse_validation::validate_executable(document))
                })
                .collect();
        for (path, validation_errors) in executable_errors {
            errors.extend(
                validation_errors.iter()
                    .map(|err| format!("{}: {err}", path.display())),
            );
        }
        let num_operations: usize = executable_docs.iter()
            .map(|(_, document)| document.operations().count())
            .sum();

        // Schema files are merged so that definitions and extensions may be
        // split across files.
        let mut num_types = 0;
        let mut num_directives = 0;
        if !schema_docs.is_empty() {
            let mut merged = Document { definitions: IndexedList::new() };
            for (file, document) in schema_docs {
                log::trace!("Merging schema definitions from {:#?}.", file.path);
                merged.definitions.join(document.definitions);
            }
            match gqlparse_validation::build_schema(None, &merged) {
                Ok(schema) => {
                    num_types = schema.types().len();
                    num_directives = schema.directives().len();
                },
                Err(schema_errors) => errors.extend(
                    schema_errors.iter().map(|err| format!("schema: {err}")),
                ),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                output_utils::bulleted(&errors),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            sources.len(),
            num_non_graphql_files,
            num_types,
            num_directives,
            num_operations,
        ))
    }
}

impl ValidateCmd {
    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn scan_files(&self, errors: &mut Vec<String>) -> FileScan {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(err.to_string());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let has_graphql_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if has_graphql_ext {
                    log::trace!("Found file at {entry_path:#?}.");
                    push_canonicalized(entry_path, &mut file_paths, errors);
                } else {
                    num_non_graphql_files += 1;
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file loaded and validated as a GraphQL
        // file -- even if its file extension doesn't match one of the file
        // extensions specified in `graphql_file_exts`.
        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_non_graphql_files = num_non_graphql_files.saturating_sub(1);
            push_canonicalized(first_arg_path, &mut file_paths, errors);
        }

        file_paths.sort();
        file_paths.dedup();
        FileScan { file_paths, num_non_graphql_files }
    }

    fn is_schema_document(&self, document: &Document<'_>) -> bool {
        match self.mode {
            ValidationMode::Executable => false,
            ValidationMode::Sdl => true,
            ValidationMode::Auto => document.definitions.iter()
                .all(|def| !matches!(def, Definition::Executable(_))),
        }
    }
}

fn push_canonicalized(path: &Path, file_paths: &mut Vec<PathBuf>, errors: &mut Vec<String>) {
    match std::fs::canonicalize(path) {
        Ok(canonical) => file_paths.push(canonical),
        Err(err) => errors.push(format!("{}: {err}", path.display())),
    }
}

/// Reads every file concurrently. Results are returned in `file_paths` order.
async fn read_source_files(
    file_paths: Vec<PathBuf>,
    errors: &mut Vec<String>,
) -> Vec<SourceFile> {
    let mut reads = tokio::task::JoinSet::new();
    for (index, path) in file_paths.into_iter().enumerate() {
        reads.spawn(async move {
            let result = tokio::fs::read_to_string(&path).await;
            (index, path, result)
        });
    }

    let mut sources = vec![];
    while let Some(joined) = reads.join_next().await {
        match joined {
            Ok((index, path, Ok(source))) => sources.push((index, SourceFile { path, source })),
            Ok((_, path, Err(err))) => errors.push(format!("{}: {err}", path.display())),
            Err(err) => errors.push(format!("file read task failed: {err}")),
        }
    }
    sources.sort_by_key(|(index, _)| *index);
    sources.into_iter().map(|(_, file)| file).collect()
}

use std::{
    collections::{HashMap, VecDeque},
    fs,
    io::{self, BufRead, Write},
};

/// The outside world as seen by a running program.
///
/// Built-ins never touch the console or the filesystem directly; they go
/// through a host. [`StdHost`] is the real one, [`MemoryHost`] keeps
/// everything in memory for tests and embedders.
pub trait Host {
    /// Writes `line` followed by a new line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Reads one line, without its line terminator.
    fn read_line(&mut self) -> io::Result<String>;

    /// Returns the contents of the file at `path`.
    ///
    /// A missing file must be reported with [`io::ErrorKind::NotFound`].
    fn read_file(&mut self, path: &str) -> io::Result<String>;

    /// Creates or replaces the file at `path`.
    fn write_file(&mut self, path: &str, contents: &str) -> io::Result<()>;
}

/// A host backed by the process's standard streams and the real
/// filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdHost;

impl Host for StdHost {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_owned())
    }

    fn read_file(&mut self, path: &str) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_file(&mut self, path: &str, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// An in-memory host.
///
/// Output lines are recorded, input lines are served from a queue and files
/// live in a map. Nothing outside the struct is touched.
///
/// # Example
/// ```
/// use glang::{host::MemoryHost, run_with_host};
///
/// let mut host = MemoryHost::default().with_input("Rex");
/// run_with_host("<test>", "bark(\"hello \" + chew())", &mut host).unwrap();
///
/// assert_eq!(host.output(), ["hello Rex"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    output: Vec<String>,
    input:  VecDeque<String>,
    files:  HashMap<String, String>,
}

impl MemoryHost {
    /// Queues a line of input.
    #[must_use]
    pub fn with_input(mut self, line: impl Into<String>) -> Self {
        self.input.push_back(line.into());
        self
    }

    /// Adds a file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Every line written so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The contents of the file at `path`, if it exists.
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl Host for MemoryHost {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_owned());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"))
    }

    fn read_file(&mut self, path: &str) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
                                          io::Error::new(io::ErrorKind::NotFound,
                                                         format!("no such file: {path}"))
                                      })
    }

    fn write_file(&mut self, path: &str, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_owned(), contents.to_owned());
        Ok(())
    }
}

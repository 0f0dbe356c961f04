//! License menu and LICENSE file rendering.

use crate::error::Result;
use crate::output;
use crate::prompt::Prompter;
use std::fmt;

/// Placeholder written where the copyright holder's name belongs.
pub const COPYRIGHT_HOLDER: &str = "[COPYRIGHT HOLDER]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    Mit,
    Apache2,
    Gpl3,
    None,
}

impl License {
    /// Menu order; choice `n` is `ALL[n - 1]`.
    pub const ALL: [License; 4] = [License::Mit, License::Apache2, License::Gpl3, License::None];

    pub fn name(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
            License::None => "None",
        }
    }

    /// Parse a 1-based menu choice.
    pub fn from_choice(choice: &str) -> Option<License> {
        let n: usize = choice.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Full text of the LICENSE file.
    pub fn render(&self, year: i32) -> String {
        match self {
            License::Mit => format!(
                "MIT License

Copyright (c) {year} {COPYRIGHT_HOLDER}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"
            ),
            License::Apache2 => format!(
                "Apache License, Version 2.0

Copyright {year} {COPYRIGHT_HOLDER}

Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"
            ),
            License::Gpl3 => format!(
                "GNU GENERAL PUBLIC LICENSE, Version 3

Copyright (C) {year} {COPYRIGHT_HOLDER}

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
"
            ),
            License::None => format!(
                "Copyright (c) {year} {COPYRIGHT_HOLDER}. All rights reserved.\n"
            ),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a menu answer. Anything outside 1-4 falls back to MIT and
/// yields the message to report.
pub fn resolve_choice(answer: &str) -> (License, Option<String>) {
    match License::from_choice(answer) {
        Some(license) => (license, None),
        None => (
            License::Mit,
            Some(format!(
                "Invalid license choice '{answer}', defaulting to {}",
                License::Mit
            )),
        ),
    }
}

/// Show the license menu and read a choice.
///
/// Invalid input is reported at error level and coerced to MIT rather than
/// re-prompting or aborting.
pub fn select_license(prompter: &mut dyn Prompter) -> Result<License> {
    let menu = License::ALL
        .iter()
        .enumerate()
        .map(|(i, l)| format!("  {}) {l}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    output::info(&format!("Choose a license:\n{menu}"));

    let answer = prompter.ask("Select a license [1-4]:")?;
    let (license, complaint) = resolve_choice(&answer);
    if let Some(msg) = complaint {
        output::error(&msg);
        tracing::debug!(%answer, "license choice defaulted");
    }
    Ok(license)
}

//! `ADD`-family and `DEL` statements.

use super::Runtime;
use glam::DVec3;
use gdl_script::split_args;

impl Runtime {
    /// Executes a transform statement. Returns false if `keyword` is not
    /// one.
    pub(super) fn execute_transform(&mut self, keyword: &str, args: &str, line: usize) -> bool {
        match keyword {
            "ADD" | "ADDX" | "ADDY" | "ADDZ" => self.execute_add(keyword, args, line),
            "DEL" => self.execute_del(args, line),
            _ => return false,
        }
        true
    }

    fn execute_add(&mut self, keyword: &str, args: &str, line: usize) {
        // Every argument is evaluated so each failure gets its own warning.
        let values: Vec<Option<f64>> = split_args(args)
            .into_iter()
            .map(|arg| self.eval_expr(arg, line))
            .collect();
        let Some(values) = values.into_iter().collect::<Option<Vec<f64>>>() else {
            self.diagnostics
                .warn(line, format!("{keyword} arguments could not be evaluated, skipped"));
            return;
        };

        let delta = match (keyword, values.as_slice()) {
            ("ADD", [dx, dy, dz, ..]) => DVec3::new(*dx, *dy, *dz),
            ("ADD", [dx, dy]) => DVec3::new(*dx, *dy, 0.0),
            ("ADD", _) => {
                self.diagnostics
                    .warn(line, "ADD needs at least x and y, skipped");
                return;
            }
            ("ADDX", [dx, ..]) => DVec3::new(*dx, 0.0, 0.0),
            ("ADDY", [dy, ..]) => DVec3::new(0.0, *dy, 0.0),
            ("ADDZ", [dz, ..]) => DVec3::new(0.0, 0.0, *dz),
            _ => {
                self.diagnostics
                    .warn(line, format!("{keyword} missing argument, skipped"));
                return;
            }
        };

        self.transforms.push(delta);
    }

    fn execute_del(&mut self, args: &str, line: usize) {
        let count = match split_args(args).first() {
            None => 1,
            Some(arg) => match self.eval_expr(arg, line) {
                // Saturating cast: negative and NaN become 0, then 1.
                Some(value) => (value.round_ties_even() as usize).max(1),
                None => {
                    self.diagnostics
                        .warn(line, "DEL argument could not be evaluated, using 1");
                    1
                }
            },
        };

        let depth = self.transforms.depth();
        if count > depth {
            self.diagnostics.warn(
                line,
                format!("DEL {count} exceeds stack depth {depth}, stack cleared"),
            );
        }
        self.transforms.pop(count);
    }
}

//! Builder: assemble a many-field value step by step, by name, in any
//! order, instead of through a positional constructor.

/// A fixed computer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub storage: String,
}

impl Computer {
    pub fn builder() -> ComputerBuilder { ComputerBuilder::default() }

    /// Multi-line configuration summary.
    pub fn summary(&self) -> String {
        format!(
            "Computer Configuration:\nCPU: {}\nGPU: {}\nRAM: {}\nStorage: {}",
            self.cpu, self.gpu, self.ram, self.storage
        )
    }
}

/// Consuming builder for [`Computer`]. Parts left unset come out as
/// `"none"`, so a partial build is still a valid configuration.
#[derive(Default)]
pub struct ComputerBuilder {
    cpu: Option<String>,
    gpu: Option<String>,
    ram: Option<String>,
    storage: Option<String>,
}

impl ComputerBuilder {
    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.gpu = Some(gpu.into());
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.ram = Some(ram.into());
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    pub fn build(self) -> Computer {
        let or_none = |part: Option<String>| part.unwrap_or_else(|| "none".to_string());
        Computer {
            cpu: or_none(self.cpu),
            gpu: or_none(self.gpu),
            ram: or_none(self.ram),
            storage: or_none(self.storage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_all_parts_named() {
        let computer = Computer::builder()
            .cpu("Intel i9")
            .gpu("RTX 4090")
            .ram("64GB")
            .storage("2TB SSD")
            .build();

        assert_eq!(
            computer,
            Computer {
                cpu: "Intel i9".into(),
                gpu: "RTX 4090".into(),
                ram: "64GB".into(),
                storage: "2TB SSD".into(),
            }
        );
    }

    #[test]
    fn unset_parts_default_to_none() {
        let computer = Computer::builder().cpu("Ryzen 7").build();
        assert_eq!(computer.gpu, "none");
        assert_eq!(computer.ram, "none");
        assert_eq!(computer.storage, "none");
    }

    #[test]
    fn parts_may_be_set_in_any_order() {
        let a = Computer::builder().cpu("M3").ram("32GB").build();
        let b = Computer::builder().ram("32GB").cpu("M3").build();
        assert_eq!(a, b);
    }

    #[test]
    fn summary_lists_every_part() {
        let computer = Computer::builder().cpu("Intel i9").gpu("RTX 4090").ram("64GB").storage("2TB SSD").build();
        assert_eq!(
            computer.summary(),
            "Computer Configuration:\nCPU: Intel i9\nGPU: RTX 4090\nRAM: 64GB\nStorage: 2TB SSD"
        );
    }
}

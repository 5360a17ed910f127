use fetchsim_core::FetchInputs;

/// Fluent builder for one cycle's input ports.
///
/// Every port defaults to zero/false; tests set only the signals a cycle
/// actually drives.
pub struct CycleBuilder(FetchInputs);

impl Default for CycleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleBuilder {
    pub fn new() -> Self {
        Self(FetchInputs::default())
    }

    /// Authoritative next-fetch address presented by the execute stage.
    pub fn executor(mut self, pc: u64) -> Self {
        self.0.executor_next_pc = pc;
        self
    }

    /// Memory accepted a fetch request this cycle.
    pub fn request_accepted(mut self) -> Self {
        self.0.request_accepted = true;
        self
    }

    /// Memory returned `data` for `addr` this cycle.
    pub fn response(mut self, addr: u64, data: u32) -> Self {
        self.0.response_valid = true;
        self.0.response_addr = addr;
        self.0.response_data = data;
        self
    }

    /// Current return-address register value.
    pub fn ra(mut self, ra: u64) -> Self {
        self.0.return_addr_reg = ra;
        self
    }

    pub fn build(self) -> FetchInputs {
        self.0
    }
}

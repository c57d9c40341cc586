//! Thread-to-core pinning for stable timing.
//!
//! The measurement worker pins itself to the core it is already running
//! on so the scheduler cannot migrate it mid-sweep. Pinning is best
//! effort; on platforms without affinity control the guard is a no-op.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;
    use std::mem;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn pin_to_current_core() -> Option<usize> {
        unsafe {
            let core = libc::sched_getcpu();
            if core < 0 {
                return None;
            }

            let mut original: libc::cpu_set_t = mem::zeroed();
            if libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut original) != 0 {
                return None;
            }

            let mut pinned: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut pinned);
            libc::CPU_SET(core as usize, &mut pinned);
            if libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &pinned) != 0 {
                return None;
            }

            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(original));
            Some(core as usize)
        }
    }

    pub fn unpin() {
        ORIGINAL_AFFINITY.with(|cell| {
            if let Some(original) = cell.borrow_mut().take() {
                unsafe {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &original);
                }
            }
        });
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn pin_to_current_core() -> Option<usize> {
        None
    }

    pub fn unpin() {}
}

/// RAII guard: pins the current thread to its current core on creation,
/// restores the original affinity mask on drop.
pub struct CpuPinGuard {
    core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            core: platform::pin_to_current_core(),
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.core.is_some() {
            platform::unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

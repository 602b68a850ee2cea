//! USB HID mouse device and report loop.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral, exposes one HID mouse endpoint, and runs the periodic
//! square-path report task.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config;
use crate::error::Error;
use crate::hid::mouse::{MouseReport, MOUSE_REPORT_DESCRIPTOR, MOUSE_REPORT_SIZE};
use crate::motion::{self, SquareTrajectory};
use defmt::{info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_time::{Duration, Ticker};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::{Builder, Config, Handler, UsbDevice};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

static MOUSE_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_BUS_HANDLER: StaticCell<BusStateHandler> = StaticCell::new();
static USB_REQUEST_HANDLER: StaticCell<IgnoreRequests> = StaticCell::new();

// Bus state polled by the report loop. Written only from the USB task's
// Handler callbacks.
static CONFIGURED: AtomicBool = AtomicBool::new(false);
static SUSPENDED: AtomicBool = AtomicBool::new(false);

struct BusStateHandler;

impl Handler for BusStateHandler {
    fn reset(&mut self) {
        CONFIGURED.store(false, Ordering::Relaxed);
    }

    fn configured(&mut self, configured: bool) {
        CONFIGURED.store(configured, Ordering::Relaxed);
        info!("USB configured={}", configured);
    }

    fn suspended(&mut self, suspended: bool) {
        SUSPENDED.store(suspended, Ordering::Relaxed);
        info!("USB suspended={}", suspended);
    }
}

/// GET_REPORT / SET_REPORT are accepted and ignored - the device only
/// streams input reports and carries no host-settable state.
struct IgnoreRequests;

impl RequestHandler for IgnoreRequests {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, _data: &[u8]) -> OutResponse {
        OutResponse::Accepted
    }
}

/// Host connection predicate for the report loop.
///
/// True once enumeration reached the Configured state and the bus is
/// not suspended.
pub fn is_host_ready() -> bool {
    CONFIGURED.load(Ordering::Relaxed) && !SUSPENDED.load(Ordering::Relaxed)
}

/// Build result containing the USB device runner and the mouse writer.
pub struct UsbMouse {
    pub device: UsbDevice<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>>,
    pub mouse_writer: HidWriter<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>, 8>,
}

/// Initialise the USB stack and create the HID mouse device.
///
/// Must be called exactly once. All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbMouse {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;
    usb_config.supports_remote_wakeup = true;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    // Build the USB device.
    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let bus_handler = USB_BUS_HANDLER.init(BusStateHandler);
    builder.handler(bus_handler);

    let mouse_state = MOUSE_STATE.init(State::new());
    let request_handler = USB_REQUEST_HANDLER.init(IgnoreRequests);
    let mouse_config = HidConfig {
        report_descriptor: MOUSE_REPORT_DESCRIPTOR,
        request_handler: Some(request_handler),
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let mouse_writer = HidWriter::new(&mut builder, mouse_state, mouse_config);

    let device = builder.build();

    info!("USB HID mouse device initialised");

    UsbMouse {
        device,
        mouse_writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
/// It runs forever (or until the USB cable is disconnected).
pub async fn run_usb_device(
    mut device: UsbDevice<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>>,
) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Square-path report task - emits one relative mouse report every
/// [`config::REPORT_INTERVAL_MS`] while the host connection is up.
///
/// Disconnected ticks leave the trajectory untouched, so the path
/// resumes where it stopped rather than skipping steps.
pub async fn square_report_task(
    mut mouse: HidWriter<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>, 8>,
) -> ! {
    info!("mouse report task started - tracing square path");

    let mut trajectory = SquareTrajectory::new();
    let mut ticker = Ticker::every(Duration::from_millis(config::REPORT_INTERVAL_MS));

    loop {
        ticker.next().await;

        let Some((dx, dy)) = motion::next_report_delta(&mut trajectory, is_host_ready()) else {
            continue;
        };

        let report = MouseReport::moving(dx, dy);
        if let Err(_e) = send_report(&mut mouse, &report).await {
            warn!("USB mouse write failed");
        }
    }
}

async fn send_report(
    mouse: &mut HidWriter<'static, Driver<'static, peripherals::USBD, HardwareVbusDetect>, 8>,
    report: &MouseReport,
) -> Result<(), Error> {
    let mut buf = [0u8; MOUSE_REPORT_SIZE + 1];
    let n = report.serialize_with_id(config::MOUSE_REPORT_ID, &mut buf);
    if n == 0 {
        return Err(Error::BufferOverflow);
    }
    mouse.write(&buf[..n]).await.map_err(|_| Error::Usb)
}

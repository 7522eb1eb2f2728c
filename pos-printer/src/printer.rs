//! Platform spooler queries

/// Enumerate printers where the platform allows it.
///
/// Returns `None` on platforms without spooler enumeration; the print
/// bridge treats that as "cannot check" and proceeds straight to the OS
/// dialog. Enumeration failures also degrade to `None` rather than
/// blocking a print attempt.
pub fn available_printers() -> Option<Vec<String>> {
    #[cfg(windows)]
    {
        match list_printers() {
            Ok(names) => Some(names),
            Err(e) => {
                tracing::warn!(error = %e, "printer enumeration failed");
                None
            }
        }
    }
    #[cfg(not(windows))]
    {
        None
    }
}

/// List installed printers, filtering out virtual printers by port name
#[cfg(windows)]
pub fn list_printers() -> crate::PrintResult<Vec<String>> {
    use crate::PrintError;
    use windows::core::PWSTR;
    use windows::Win32::Graphics::Printing::{
        EnumPrintersW, PRINTER_ENUM_CONNECTIONS, PRINTER_ENUM_LOCAL, PRINTER_INFO_5W,
    };

    unsafe {
        let flags = PRINTER_ENUM_LOCAL | PRINTER_ENUM_CONNECTIONS;
        let mut needed: u32 = 0;
        let mut returned: u32 = 0;

        let _ = EnumPrintersW(flags, None, 5, None, &mut needed, &mut returned);
        if needed == 0 {
            return Ok(Vec::new());
        }

        let mut buf: Vec<u8> = vec![0; needed as usize];
        EnumPrintersW(
            flags,
            None,
            5,
            Some(buf.as_mut_slice()),
            &mut needed,
            &mut returned,
        )
        .map_err(|_| PrintError::Spooler("EnumPrintersW failed".to_string()))?;

        let infos =
            std::slice::from_raw_parts(buf.as_ptr() as *const PRINTER_INFO_5W, returned as usize);

        let mut printers = Vec::new();
        for info in infos {
            if info.pPrinterName.is_null() {
                continue;
            }
            let name = PWSTR(info.pPrinterName.0).to_string().unwrap_or_default();
            let port = if info.pPortName.is_null() {
                String::new()
            } else {
                PWSTR(info.pPortName.0).to_string().unwrap_or_default()
            };

            if !is_virtual_port(&port) {
                printers.push(name);
            }
        }

        Ok(printers)
    }
}

/// Name of the system default printer, if one is configured
#[cfg(windows)]
pub fn default_printer() -> crate::PrintResult<Option<String>> {
    use crate::PrintError;
    use windows::core::PWSTR;
    use windows::Win32::Graphics::Printing::GetDefaultPrinterW;

    unsafe {
        let mut needed: u32 = 0;
        let _ = GetDefaultPrinterW(None, &mut needed);
        if needed == 0 {
            return Ok(None);
        }

        let mut buf: Vec<u16> = vec![0; needed as usize];
        if !GetDefaultPrinterW(Some(PWSTR(buf.as_mut_ptr())), &mut needed).as_bool() {
            return Ok(None);
        }

        let name = PWSTR(buf.as_mut_ptr())
            .to_string()
            .map_err(|e| PrintError::Spooler(format!("UTF-16 decode failed: {e}")))?;
        Ok(Some(name))
    }
}

/// Ports used by PDF/XPS/OneNote style virtual printers
#[cfg(windows)]
fn is_virtual_port(port: &str) -> bool {
    let p = port.to_lowercase();
    p == "file:"
        || p == "portprompt:"
        || p == "xpsport:"
        || p == "nul:"
        || p.starts_with("onenote")
        || p.starts_with("wfsport:")
}

/*!
# `PRINT <s>...`, `INPUT READ <d>`, `SLEEP <ms>`, `STIME`, `GTIME`, `CSR <x> <y>`
## Purpose
Talks to the terminal and the clock.

## Remarks
`print` writes its operands back to back. Spaces separate operands, so use
`\s` for a space, `\n` for a new line and `\e` for the escape character.

`input` shows `? ` and waits for a line, `read` waits without a prompt. The
line received is written to `d`.

`sleep` waits `ms` milliseconds while the board keeps running its
sequencers.

`stime y mo d h mi s us` sets the calendar and the clock. `gtime` takes
eight lines and writes year, month, weekday (0 is Sunday), day, hour,
minute, second and microseconds into them.

`csr x y` moves the terminal cursor.

## Example
```text
stime 2024 1 2 3 4 5 0
gtime @20 @21 @22 @23 @24 @25 @26 @27
print @20 - @21 - @23
2024-1-2
```
*/

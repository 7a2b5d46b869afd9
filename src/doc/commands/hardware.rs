/*!
# `ARR FREE PICT`, `GPIO CLRGPIO INGPIO`, `SND INTSND CLRSND BEAT`, `SAVE LOAD`
## Purpose
Drives the board peripherals.

## Remarks
`arr id start count width` builds array `id` (0 to 15) from the numbers in
`count` lines starting at line `start`. Elements are `width` bytes wide,
which must be 1, 2 or 4. An existing array with the same id is freed first.
`free id` releases it; freeing twice is harmless. All arrays are released
when the script ends. `pict id` prints an array as a picture, `#` for a set
bit.

`gpio id repeat` plays array `id` on the GPIO port, one word per timer tick.
A repeat of 0 plays forever. `clrgpio mask stay` clears the pins in `mask`
and stops the pattern unless `stay` is non-zero. `ingpio d pin` writes `1`
or `0`.

`snd id repeat` plays array `id` as music. `intsnd` plays it ahead of the
current music, which resumes after. `clrsnd` stops both and `beat bpm` sets
the tempo.

`save cs first last` writes lines `first` to `last` into the EEPROM on chip
select `cs`; `load` reads them back. A failed transfer stops at the failing
line and keeps the lines already moved.

## Example
```text
let @20 129
let @21 60
arr 0 20 2 1
pict 0
#......#
..####..
```
*/
